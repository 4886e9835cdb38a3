use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, Geometry, GeometryType, MultiPolygon};
use crate::io::wkb::reader::read_members;

pub(crate) fn read_multi_polygon<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
    depth: usize,
) -> Result<MultiPolygon, CodecError> {
    let polygons = read_members::<B, _>(reader, GeometryType::MultiPolygon, depth, |g| match g {
        Geometry::Polygon(p) => Some(p),
        _ => None,
    })?;
    Ok(MultiPolygon::try_new(polygons, dim)?)
}
