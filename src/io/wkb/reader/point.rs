use std::io::Cursor;

use byteorder::ByteOrder;

use crate::error::CodecError;
use crate::geometry::{Dimension, Point};
use crate::io::wkb::reader::read_coord;

/// Read the coordinates of a WKBPoint. All-NaN coordinates are an empty point, and any other
/// non-finite ordinate is an error.
pub(crate) fn read_point<B: ByteOrder>(
    reader: &mut Cursor<&[u8]>,
    dim: Dimension,
) -> Result<Point, CodecError> {
    let coord = read_coord::<B>(reader, dim)?;
    if coord.is_nan() {
        Ok(Point::empty(dim))
    } else {
        Ok(Point::try_new(coord)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::Coord;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn read_xy() {
        let mut buf = vec![];
        buf.extend_from_slice(&47f64.to_le_bytes());
        buf.extend_from_slice(&19.2f64.to_le_bytes());
        let point = read_point::<LittleEndian>(&mut Cursor::new(&buf[..]), Dimension::XY).unwrap();
        assert_eq!(point, Point::try_new(Coord::xy(47., 19.2)).unwrap());
    }

    #[test]
    fn read_nan_as_empty() {
        let mut buf = vec![];
        for _ in 0..3 {
            buf.extend_from_slice(&f64::NAN.to_be_bytes());
        }
        let point = read_point::<BigEndian>(&mut Cursor::new(&buf[..]), Dimension::XYZ).unwrap();
        assert_eq!(point, Point::empty(Dimension::XYZ));
    }

    #[test]
    fn partly_nan_is_invalid() {
        let mut buf = vec![];
        buf.extend_from_slice(&f64::NAN.to_le_bytes());
        buf.extend_from_slice(&2f64.to_le_bytes());
        assert!(matches!(
            read_point::<LittleEndian>(&mut Cursor::new(&buf[..]), Dimension::XY),
            Err(CodecError::InvalidGeometry(GeometryError::NonFiniteOrdinate(_)))
        ));

        let mut buf = vec![];
        buf.extend_from_slice(&f64::INFINITY.to_be_bytes());
        buf.extend_from_slice(&1f64.to_be_bytes());
        assert!(matches!(
            read_point::<BigEndian>(&mut Cursor::new(&buf[..]), Dimension::XY),
            Err(CodecError::InvalidGeometry(GeometryError::NonFiniteOrdinate(v))) if v == f64::INFINITY
        ));
    }

    #[test]
    fn truncated() {
        let buf = 1f64.to_le_bytes();
        assert!(matches!(
            read_point::<LittleEndian>(&mut Cursor::new(&buf[..]), Dimension::XY),
            Err(CodecError::Truncated(8))
        ));
    }
}
