use std::io::Write;

use crate::error::CodecError;
use crate::geometry::{GeometryType, MultiPolygon};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{polygon_wkb_size, write_count, write_header, write_polygon_as_wkb};

/// The byte length of a WKBMultiPolygon
pub fn multi_polygon_wkb_size(geom: &MultiPolygon) -> usize {
    let mut sum = HEADER_BYTES + 4;
    for polygon in geom.polygons() {
        sum += polygon_wkb_size(polygon);
    }
    sum
}

/// Write a MultiPolygon geometry to a Writer encoded as WKB
pub fn write_multi_polygon_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &MultiPolygon,
) -> Result<(), CodecError> {
    write_header::<W, B>(
        writer,
        WKBType::new(GeometryType::MultiPolygon, geom.dimension()),
    )?;

    // numPolygons
    write_count::<W, B>(writer, geom.len())?;

    for polygon in geom.polygons() {
        write_polygon_as_wkb::<W, B>(writer, polygon)?;
    }

    Ok(())
}
