use std::io::Write;

use crate::error::CodecError;
use crate::geometry::{GeometryCollection, GeometryType};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{geometry_wkb_size, write_count, write_geometry_as_wkb, write_header};

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    let mut sum = HEADER_BYTES + 4;

    for inner_geom in geom.geometries() {
        sum += geometry_wkb_size(inner_geom);
    }

    sum
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
pub fn write_geometry_collection_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &GeometryCollection,
) -> Result<(), CodecError> {
    write_header::<W, B>(
        writer,
        WKBType::new(GeometryType::GeometryCollection, geom.dimension()),
    )?;

    // numGeometries
    write_count::<W, B>(writer, geom.len())?;

    for inner_geom in geom.geometries() {
        write_geometry_as_wkb::<W, B>(writer, inner_geom)?;
    }

    Ok(())
}
