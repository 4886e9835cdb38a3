use std::io::Cursor;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::CodecError;
use crate::geometry::{Geometry, GeometryType, Point, MAX_NESTING_DEPTH};
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::reader::geometrycollection::read_geometry_collection;
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::multilinestring::read_multi_line_string;
use crate::io::wkb::reader::multipoint::read_multi_point;
use crate::io::wkb::reader::multipolygon::read_multi_polygon;
use crate::io::wkb::reader::point::read_point;
use crate::io::wkb::reader::polygon::read_polygon;
use crate::io::wkb::reader::{at_header, read_u32, read_u8, remaining};

/// Read one complete WKB geometry, starting at its byte order marker.
///
/// `depth` is 0 for a top-level geometry. Only a top-level point may be a bare header, and only
/// when it ends the buffer or is directly followed by another WKB header.
pub fn read_geometry(reader: &mut Cursor<&[u8]>, depth: usize) -> Result<Geometry, CodecError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(CodecError::Structure(format!(
            "geometries nested deeper than {MAX_NESTING_DEPTH} levels"
        )));
    }

    let byte_order = Endianness::try_from(read_u8(reader)?)?;
    match byte_order {
        Endianness::LittleEndian => read_body::<LittleEndian>(reader, depth),
        Endianness::BigEndian => read_body::<BigEndian>(reader, depth),
    }
}

fn read_body<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    depth: usize,
) -> Result<Geometry, CodecError> {
    let wkb_type = WKBType::from_code(read_u32::<B>(reader)?)?;
    let dim = wkb_type.dimension();

    let geom: Geometry = match wkb_type.geometry_type() {
        GeometryType::Point if depth == 0 && (remaining(reader) == 0 || at_header(reader)) => {
            Point::empty(dim).into()
        }
        GeometryType::Point => read_point::<B>(reader, dim)?.into(),
        GeometryType::LineString => read_line_string::<B>(reader, dim)?.into(),
        GeometryType::Polygon => read_polygon::<B>(reader, dim)?.into(),
        GeometryType::MultiPoint => read_multi_point::<B>(reader, dim, depth)?.into(),
        GeometryType::MultiLineString => read_multi_line_string::<B>(reader, dim, depth)?.into(),
        GeometryType::MultiPolygon => read_multi_polygon::<B>(reader, dim, depth)?.into(),
        GeometryType::GeometryCollection => {
            read_geometry_collection::<B>(reader, dim, depth)?.into()
        }
    };
    Ok(geom)
}
