use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, LineString};
use crate::io::wkb::reader::read_coords;

/// Read the point count and coordinates of a WKBLineString.
pub(crate) fn read_line_string<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
) -> Result<LineString, CodecError> {
    let coords = read_coords::<B>(reader, dim)?;
    Ok(LineString::try_new(coords, dim)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;
    use byteorder::LittleEndian;

    #[test]
    fn declared_count_exceeds_buffer() {
        let mut buf = vec![];
        buf.extend_from_slice(&u32::MAX.to_le_bytes());
        buf.extend_from_slice(&1f64.to_le_bytes());
        assert!(matches!(
            read_line_string::<LittleEndian>(&mut Cursor::new(&buf[..]), Dimension::XY),
            Err(CodecError::Truncated(4))
        ));
    }

    #[test]
    fn read_xyz() {
        let mut buf = vec![];
        buf.extend_from_slice(&1u32.to_le_bytes());
        for v in [1f64, 2., 3.] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        let geom =
            read_line_string::<LittleEndian>(&mut Cursor::new(&buf[..]), Dimension::XYZ).unwrap();
        assert_eq!(geom.coords(), &[Coord::xyz(1., 2., 3.)]);
    }
}
