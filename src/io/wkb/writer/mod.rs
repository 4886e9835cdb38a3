//! Encode geometries as ISO WKB.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub(crate) use geometry::write_top_level;
pub use geometry::{geometry_wkb_size, wkb_size, write_geometry_as_wkb};
pub use geometrycollection::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use multilinestring::{multi_line_string_wkb_size, write_multi_line_string_as_wkb};
pub use multipoint::{multi_point_wkb_size, write_multi_point_as_wkb};
pub use multipolygon::{multi_polygon_wkb_size, write_multi_polygon_as_wkb};
pub use point::{point_wkb_size, write_point_as_wkb};
pub use polygon::{polygon_wkb_size, write_polygon_as_wkb};

use std::io::Write;

use byteorder::WriteBytesExt;

use crate::error::CodecError;
use crate::geometry::Coord;
use crate::io::wkb::common::{WKBType, WkbByteOrder};

/// Write the byte order marker and geometry type code.
pub(crate) fn write_header<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    wkb_type: WKBType,
) -> Result<(), CodecError> {
    writer.write_u8(B::ENDIANNESS.into())?;
    writer.write_u32::<B>(wkb_type.into())?;
    Ok(())
}

/// Write a u32 element count.
pub(crate) fn write_count<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    count: usize,
) -> Result<(), CodecError> {
    let count32 = u32::try_from(count).map_err(|_| CodecError::Overflow(count))?;
    writer.write_u32::<B>(count32)?;
    Ok(())
}

/// Write every ordinate of a coordinate as an f64.
pub(crate) fn write_coord<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    coord: &Coord,
) -> Result<(), CodecError> {
    for ordinate in coord.ordinates() {
        writer.write_f64::<B>(ordinate)?;
    }
    Ok(())
}

/// Write a coordinate count followed by the coordinates.
pub(crate) fn write_coords<W: Write, B: WkbByteOrder>(
    writer: &mut W,
    coords: &[Coord],
) -> Result<(), CodecError> {
    write_count::<W, B>(writer, coords.len())?;
    for coord in coords {
        write_coord::<W, B>(writer, coord)?;
    }
    Ok(())
}
