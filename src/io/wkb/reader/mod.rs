//! Decode ISO WKB into owned geometries.
//!
//! Every geometry carries its own byte order marker, so nested members may use a different byte
//! order than their parent. Counts are checked against the remaining buffer before anything is
//! allocated.

mod geometry;
mod geometrycollection;
mod linearring;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometry::read_geometry;

use std::io::Cursor;

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};

use crate::error::CodecError;
use crate::geometry::{Coord, Dimension, Geometry, GeometryType};
use crate::io::wkb::common::{WKBType, HEADER_BYTES};

/// The number of unread bytes.
pub(crate) fn remaining(reader: &Cursor<&[u8]>) -> usize {
    let len = reader.get_ref().len() as u64;
    len.saturating_sub(reader.position()) as usize
}

/// Whether the unread bytes start with a WKB header: a byte order marker and a known type code.
pub(crate) fn at_header(reader: &Cursor<&[u8]>) -> bool {
    let pos = reader.position() as usize;
    let Some(header) = reader.get_ref().get(pos..pos + HEADER_BYTES) else {
        return false;
    };
    let code = match header[0] {
        0 => BigEndian::read_u32(&header[1..]),
        1 => LittleEndian::read_u32(&header[1..]),
        _ => return false,
    };
    WKBType::from_code(code).is_ok()
}

// A failed read leaves the cursor at the end of the buffer, so the offset is taken first.

pub(crate) fn read_u8(reader: &mut Cursor<&[u8]>) -> Result<u8, CodecError> {
    let pos = reader.position();
    reader.read_u8().map_err(|_| CodecError::Truncated(pos))
}

pub(crate) fn read_u32<B: ByteOrder>(reader: &mut Cursor<&[u8]>) -> Result<u32, CodecError> {
    let pos = reader.position();
    reader.read_u32::<B>().map_err(|_| CodecError::Truncated(pos))
}

pub(crate) fn read_f64<B: ByteOrder>(reader: &mut Cursor<&[u8]>) -> Result<f64, CodecError> {
    let pos = reader.position();
    reader.read_f64::<B>().map_err(|_| CodecError::Truncated(pos))
}

/// Read a u32 count of items that each take at least `min_item_bytes` bytes.
pub(crate) fn read_count<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    min_item_bytes: usize,
) -> Result<usize, CodecError> {
    let count = read_u32::<B>(reader)? as usize;
    if count.saturating_mul(min_item_bytes) > remaining(reader) {
        return Err(CodecError::Truncated(reader.position()));
    }
    Ok(count)
}

pub(crate) fn read_coord<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
) -> Result<Coord, CodecError> {
    let x = read_f64::<B>(reader)?;
    let y = read_f64::<B>(reader)?;
    match dim {
        Dimension::XY => Ok(Coord::xy(x, y)),
        Dimension::XYZ => Ok(Coord::xyz(x, y, read_f64::<B>(reader)?)),
    }
}

/// Read a coordinate count followed by the coordinates.
pub(crate) fn read_coords<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
) -> Result<Vec<Coord>, CodecError> {
    let num_coords = read_count::<B>(reader, dim.size() * 8)?;
    let mut coords = Vec::with_capacity(num_coords);
    for _ in 0..num_coords {
        coords.push(read_coord::<B>(reader, dim)?);
    }
    Ok(coords)
}

/// Read the members of a homogeneous collection, checking that each is a `child_type`.
pub(crate) fn read_members<B: ByteOrder, T>(
    reader: &mut Cursor<&[u8]>,
    parent: GeometryType,
    depth: usize,
    extract: impl Fn(Geometry) -> Option<T>,
) -> Result<Vec<T>, CodecError> {
    let num_members = read_count::<B>(reader, HEADER_BYTES)?;
    let mut members = Vec::with_capacity(num_members);
    for _ in 0..num_members {
        let child = read_geometry(reader, depth + 1)?;
        let child_type = child.geometry_type();
        let member = extract(child).ok_or(CodecError::UnexpectedChild {
            parent,
            child: child_type,
        })?;
        members.push(member);
    }
    Ok(members)
}
