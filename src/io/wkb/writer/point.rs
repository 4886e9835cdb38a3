use std::io::Write;

use byteorder::WriteBytesExt;

use crate::error::CodecError;
use crate::geometry::{Dimension, GeometryType, Point};
use crate::io::wkb::common::{WKBType, WkbByteOrder, HEADER_BYTES};
use crate::io::wkb::writer::{write_coord, write_header};

/// The byte length of a WKBPoint
pub fn point_wkb_size(dim: Dimension) -> usize {
    let coords = dim.size() * 8;
    HEADER_BYTES + coords
}

/// Write a Point geometry to a Writer encoded as WKB
///
/// An empty point is written with NaN ordinates.
pub fn write_point_as_wkb<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    geom: &Point,
) -> Result<(), CodecError> {
    let dim = geom.dimension();
    write_header::<W, B>(writer, WKBType::new(GeometryType::Point, dim))?;

    match geom.coord() {
        Some(coord) => write_coord::<W, B>(writer, coord)?,
        None => {
            for _ in 0..dim.size() {
                writer.write_f64::<B>(f64::NAN)?;
            }
        }
    }

    Ok(())
}
