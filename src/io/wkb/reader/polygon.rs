use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, Polygon};
use crate::io::wkb::reader::linearring::read_linear_ring;
use crate::io::wkb::reader::read_count;

/// Read the ring count and rings of a WKBPolygon.
pub(crate) fn read_polygon<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
) -> Result<Polygon, CodecError> {
    // Each ring has at least its own point count
    let num_rings = read_count::<B>(reader, 4)?;
    let mut rings = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        rings.push(read_linear_ring::<B>(reader, dim)?);
    }
    Ok(Polygon::try_new(rings, dim)?)
}
