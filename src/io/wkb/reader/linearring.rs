use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, LineString};
use crate::io::wkb::reader::read_coords;

/// Read a linear ring: a point count and coordinates, with no header.
///
/// The ring is validated for closure and length.
pub(crate) fn read_linear_ring<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
) -> Result<LineString, CodecError> {
    let ring = LineString::try_new(read_coords::<B>(reader, dim)?, dim)?;
    ring.validate_ring()?;
    Ok(ring)
}
