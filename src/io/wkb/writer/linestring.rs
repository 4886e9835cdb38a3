use std::io::Write;

use crate::error::CodecError;
use crate::geometry::{GeometryType, LineString};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{write_coords, write_header};

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_BYTES + 4 + (geom.num_coords() * geom.dimension().size() * 8)
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &LineString,
) -> Result<(), CodecError> {
    write_header::<W, B>(
        writer,
        WKBType::new(GeometryType::LineString, geom.dimension()),
    )?;
    write_coords::<W, B>(writer, geom.coords())
}
