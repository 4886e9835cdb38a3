use std::io::Write;

use crate::error::CodecError;
use crate::geometry::{Geometry, GeometryType};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{
    geometry_collection_wkb_size, line_string_wkb_size, multi_line_string_wkb_size,
    multi_point_wkb_size, multi_polygon_wkb_size, point_wkb_size, polygon_wkb_size,
    write_geometry_collection_as_wkb, write_header, write_line_string_as_wkb,
    write_multi_line_string_as_wkb, write_multi_point_as_wkb, write_multi_polygon_as_wkb,
    write_point_as_wkb, write_polygon_as_wkb,
};

/// The byte length of a Geometry nested inside a collection
pub fn geometry_wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Point(p) => point_wkb_size(p.dimension()),
        Geometry::LineString(ls) => line_string_wkb_size(ls),
        Geometry::Polygon(p) => polygon_wkb_size(p),
        Geometry::MultiPoint(mp) => multi_point_wkb_size(mp),
        Geometry::MultiLineString(ml) => multi_line_string_wkb_size(ml),
        Geometry::MultiPolygon(mp) => multi_polygon_wkb_size(mp),
        Geometry::GeometryCollection(gc) => geometry_collection_wkb_size(gc),
    }
}

/// The exact byte length [`write_wkb`](crate::io::wkb::write_wkb) produces for `geom`.
///
/// A top-level empty point is a bare header.
pub fn wkb_size(geom: &Geometry) -> usize {
    match geom {
        Geometry::Point(p) if p.is_empty() => HEADER_BYTES,
        _ => geometry_wkb_size(geom),
    }
}

/// Write a Geometry to a Writer encoded as WKB, in its nested form
pub fn write_geometry_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &Geometry,
) -> Result<(), CodecError> {
    match geom {
        Geometry::Point(p) => write_point_as_wkb::<W, B>(writer, p),
        Geometry::LineString(ls) => write_line_string_as_wkb::<W, B>(writer, ls),
        Geometry::Polygon(p) => write_polygon_as_wkb::<W, B>(writer, p),
        Geometry::MultiPoint(mp) => write_multi_point_as_wkb::<W, B>(writer, mp),
        Geometry::MultiLineString(ml) => write_multi_line_string_as_wkb::<W, B>(writer, ml),
        Geometry::MultiPolygon(mp) => write_multi_polygon_as_wkb::<W, B>(writer, mp),
        Geometry::GeometryCollection(gc) => write_geometry_collection_as_wkb::<W, B>(writer, gc),
    }
}

/// Write a top-level Geometry, where an empty point has no payload.
pub(crate) fn write_top_level<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &Geometry,
) -> Result<(), CodecError> {
    match geom {
        Geometry::Point(p) if p.is_empty() => {
            write_header::<W, B>(writer, WKBType::new(GeometryType::Point, p.dimension()))
        }
        _ => write_geometry_as_wkb::<W, B>(writer, geom),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::all_geometries;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn test_size() {
        for geom in all_geometries() {
            let mut little = vec![];
            write_top_level::<_, LittleEndian>(&mut little, &geom).unwrap();
            assert_eq!(wkb_size(&geom), little.len(), "{geom:?}");

            let mut big = vec![];
            write_top_level::<_, BigEndian>(&mut big, &geom).unwrap();
            assert_eq!(little.len(), big.len());
        }
    }
}
