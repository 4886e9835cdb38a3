use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, Geometry, GeometryType, MultiPoint};
use crate::io::wkb::reader::read_members;

pub(crate) fn read_multi_point<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
    depth: usize,
) -> Result<MultiPoint, CodecError> {
    let points = read_members::<B, _>(reader, GeometryType::MultiPoint, depth, |g| match g {
        Geometry::Point(p) => Some(p),
        _ => None,
    })?;
    Ok(MultiPoint::try_new(points, dim)?)
}
