use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, GeometryCollection, GeometryType};
use crate::io::wkb::reader::read_members;

pub(crate) fn read_geometry_collection<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
    depth: usize,
) -> Result<GeometryCollection, CodecError> {
    let geometries =
        read_members::<B, _>(reader, GeometryType::GeometryCollection, depth, Some)?;
    Ok(GeometryCollection::try_new(geometries, dim)?)
}
