//! Parse and write Well-Known Text.

mod reader;
mod writer;

use std::fmt;
use std::str::FromStr;

pub use reader::parse_wkt;
pub use writer::{
    write_geometry, write_geometry_collection, write_line_string, write_multi_line_string,
    write_multi_point, write_multi_polygon, write_point, write_polygon,
};

use crate::error::ParseError;
use crate::geometry::Geometry;

/// Write a Geometry as WKT to any [`fmt::Write`].
pub fn write_wkt<W: fmt::Write>(writer: &mut W, geom: &Geometry) -> fmt::Result {
    write_geometry(writer, geom)
}

/// Write a Geometry to a WKT string.
///
/// ```
/// use geocodec::io::wkt::{parse_wkt, to_wkt};
///
/// let geom = parse_wkt("point (47.0 19.2)").unwrap();
/// assert_eq!(to_wkt(&geom), "POINT(47 19.2)");
/// ```
pub fn to_wkt(geom: &Geometry) -> String {
    geom.to_string()
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_geometry(f, self)
    }
}

impl FromStr for Geometry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wkt(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::all_geometries;

    #[test]
    fn round_trip() {
        for geom in all_geometries() {
            let text = to_wkt(&geom);
            let parsed: Geometry = text.parse().unwrap();
            assert_eq!(parsed, geom, "{text}");
        }
    }
}
