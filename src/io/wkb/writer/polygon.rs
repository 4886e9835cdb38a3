use std::io::Write;

use crate::error::CodecError;
use crate::geometry::{GeometryType, Polygon};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{write_coords, write_count, write_header};

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    let coord_size = geom.dimension().size() * 8;
    let mut sum = HEADER_BYTES + 4;

    for ring in geom.rings() {
        sum += 4 + (ring.num_coords() * coord_size);
    }

    sum
}

/// Write a Polygon geometry to a Writer encoded as WKB
pub fn write_polygon_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &Polygon,
) -> Result<(), CodecError> {
    write_header::<W, B>(writer, WKBType::new(GeometryType::Polygon, geom.dimension()))?;

    // numRings
    write_count::<W, B>(writer, geom.rings().len())?;

    for ring in geom.rings() {
        write_coords::<W, B>(writer, ring.coords())?;
    }

    Ok(())
}
