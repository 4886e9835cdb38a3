use std::io::{Cursor, Write};

use byteorder::{BigEndian, LittleEndian};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::geometry::Geometry;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::read_geometry;
use crate::io::wkb::writer::{wkb_size, write_top_level};

/// Options for encoding WKB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WkbWriteOptions {
    /// The byte order of every geometry in the output. Defaults to little endian.
    pub byte_order: Endianness,
}

impl WkbWriteOptions {
    pub fn new(byte_order: Endianness) -> Self {
        Self { byte_order }
    }
}

/// Write a Geometry as WKB to `writer`.
pub fn write_wkb<W: Write>(
    writer: &mut W,
    geom: &Geometry,
    options: &WkbWriteOptions,
) -> Result<(), CodecError> {
    match options.byte_order {
        Endianness::LittleEndian => write_top_level::<W, LittleEndian>(writer, geom),
        Endianness::BigEndian => write_top_level::<W, BigEndian>(writer, geom),
    }
}

/// Encode a Geometry as little-endian WKB.
///
/// ```
/// use geocodec::io::wkb::to_wkb;
/// use geocodec::io::wkt::parse_wkt;
///
/// let geom = parse_wkt("POINT(47 19.2)").unwrap();
/// assert_eq!(to_wkb(&geom).unwrap().len(), 21);
/// ```
pub fn to_wkb(geom: &Geometry) -> Result<Vec<u8>, CodecError> {
    to_wkb_with_options(geom, &WkbWriteOptions::default())
}

/// Encode a Geometry as WKB with the given options.
pub fn to_wkb_with_options(
    geom: &Geometry,
    options: &WkbWriteOptions,
) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(wkb_size(geom));
    write_wkb(&mut buf, geom, options)?;
    Ok(buf)
}

/// Decode one WKB geometry from the start of `buf`.
///
/// Returns the geometry and the number of bytes consumed. Trailing bytes are left alone, so that
/// a buffer of concatenated geometries can be walked with the returned length.
///
/// A top-level empty point is a bare 5-byte header. When more bytes follow a Point header, they
/// are taken as the start of the next geometry if they form a valid header (a byte order marker
/// and a known type code), and as the point's ordinates otherwise.
pub fn from_wkb(buf: &[u8]) -> Result<(Geometry, usize), CodecError> {
    let mut reader = Cursor::new(buf);
    let geom = read_geometry(&mut reader, 0)?;
    Ok((geom, reader.position() as usize))
}

/// Decode a buffer holding WKB geometries back to back, as written by [`to_wkb`].
///
/// Each geometry is read as a top-level one, so empty points may be either bare headers or
/// NaN-filled.
pub fn from_wkb_sequence(buf: &[u8]) -> Result<Vec<Geometry>, CodecError> {
    let mut geoms = vec![];
    let mut offset = 0;
    while offset < buf.len() {
        let (geom, consumed) = from_wkb(&buf[offset..])?;
        geoms.push(geom);
        offset += consumed;
    }
    Ok(geoms)
}
