//! Encode and decode GML geometry fragments.
//!
//! The writer emits GML 2 style elements in the `gml:` prefix, such as
//! `<gml:Point><gml:coordinates>47,19.2</gml:coordinates></gml:Point>`. Polygons use
//! `outerBoundaryIs`/`innerBoundaryIs` and collections use the `*Member` wrappers. Empty
//! geometries are self-closing elements and 3D geometries carry `srsDimension="3"`.
//!
//! The reader accepts that vocabulary plus the GML 3 `pos`, `posList`, `exterior` and `interior`
//! elements.

mod reader;
mod writer;

use std::io::Write;

pub use reader::from_gml;

use crate::error::CodecError;
use crate::geometry::Geometry;
use writer::GmlWriter;

/// Write a Geometry as a GML fragment to `writer`.
pub fn write_gml<W: Write>(writer: &mut W, geom: &Geometry) -> Result<(), CodecError> {
    GmlWriter::new(writer).write_geometry(geom)
}

/// Encode a Geometry as a GML fragment.
///
/// ```
/// use geocodec::io::gml::to_gml;
/// use geocodec::io::wkt::parse_wkt;
///
/// let geom = parse_wkt("POINT(47.0 19.2)").unwrap();
/// assert_eq!(
///     to_gml(&geom).unwrap(),
///     "<gml:Point><gml:coordinates>47,19.2</gml:coordinates></gml:Point>"
/// );
/// ```
pub fn to_gml(geom: &Geometry) -> Result<String, CodecError> {
    let mut writer = GmlWriter::new(Vec::new());
    writer.write_geometry(geom)?;
    String::from_utf8(writer.into_inner()).map_err(|err| CodecError::Structure(err.to_string()))
}
