use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, Geometry, GeometryType, MultiLineString};
use crate::io::wkb::reader::read_members;

pub(crate) fn read_multi_line_string<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
    depth: usize,
) -> Result<MultiLineString, CodecError> {
    let line_strings =
        read_members::<B, _>(reader, GeometryType::MultiLineString, depth, |g| match g {
            Geometry::LineString(ls) => Some(ls),
            _ => None,
        })?;
    Ok(MultiLineString::try_new(line_strings, dim)?)
}
