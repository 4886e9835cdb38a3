use std::io::Write;

use crate::error::CodecError;
use crate::geometry::{GeometryType, MultiPoint};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{point_wkb_size, write_count, write_header, write_point_as_wkb};

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_BYTES + 4 + (geom.len() * point_wkb_size(geom.dimension()))
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
pub fn write_multi_point_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &MultiPoint,
) -> Result<(), CodecError> {
    write_header::<W, B>(
        writer,
        WKBType::new(GeometryType::MultiPoint, geom.dimension()),
    )?;

    // numPoints
    write_count::<W, B>(writer, geom.len())?;

    for point in geom.points() {
        write_point_as_wkb::<W, B>(writer, point)?;
    }

    Ok(())
}
