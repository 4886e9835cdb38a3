//! Write geometries as canonical WKT.
//!
//! 2D geometries are written as `TAG(body)`, 3D as `TAG Z (body)`, and empties as `TAG EMPTY`.
//! Numbers use the shortest decimal form that parses back to the same f64.

use std::fmt::{self, Write};

use itertools::Itertools;

use crate::geometry::{
    Coord, Dimension, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Write the tag, the optional `Z` and either `EMPTY` or an opening parenthesis.
///
/// Returns `false` for an empty geometry, in which case there is no body to write.
fn write_prefix<W: Write>(
    writer: &mut W,
    geometry_type: GeometryType,
    dim: Dimension,
    is_empty: bool,
) -> Result<bool, fmt::Error> {
    writer.write_str(geometry_type.wkt_name())?;
    match (dim, is_empty) {
        (Dimension::XY, true) => writer.write_str(" EMPTY")?,
        (Dimension::XYZ, true) => writer.write_str(" Z EMPTY")?,
        (Dimension::XY, false) => writer.write_char('(')?,
        (Dimension::XYZ, false) => writer.write_str(" Z (")?,
    }
    Ok(!is_empty)
}

fn write_coord<W: Write>(writer: &mut W, coord: &Coord) -> fmt::Result {
    write!(writer, "{}", coord.ordinates().format(" "))
}

/// `x y,x y` without surrounding parentheses.
fn write_coords<W: Write>(writer: &mut W, coords: &[Coord]) -> fmt::Result {
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 {
            writer.write_char(',')?;
        }
        write_coord(writer, coord)?;
    }
    Ok(())
}

/// `(x y,x y),(x y,x y)`
fn write_rings<W: Write>(writer: &mut W, rings: &[LineString]) -> fmt::Result {
    for (i, ring) in rings.iter().enumerate() {
        if i > 0 {
            writer.write_char(',')?;
        }
        writer.write_char('(')?;
        write_coords(writer, ring.coords())?;
        writer.write_char(')')?;
    }
    Ok(())
}

pub fn write_point<W: Write>(writer: &mut W, point: &Point) -> fmt::Result {
    let dim = point.dimension();
    if write_prefix(writer, GeometryType::Point, dim, point.is_empty())? {
        if let Some(coord) = point.coord() {
            write_coord(writer, coord)?;
        }
        writer.write_char(')')?;
    }
    Ok(())
}

pub fn write_line_string<W: Write>(writer: &mut W, line_string: &LineString) -> fmt::Result {
    let dim = line_string.dimension();
    if write_prefix(writer, GeometryType::LineString, dim, line_string.is_empty())? {
        write_coords(writer, line_string.coords())?;
        writer.write_char(')')?;
    }
    Ok(())
}

pub fn write_polygon<W: Write>(writer: &mut W, polygon: &Polygon) -> fmt::Result {
    let dim = polygon.dimension();
    if write_prefix(writer, GeometryType::Polygon, dim, polygon.is_empty())? {
        write_rings(writer, polygon.rings())?;
        writer.write_char(')')?;
    }
    Ok(())
}

pub fn write_multi_point<W: Write>(writer: &mut W, multi_point: &MultiPoint) -> fmt::Result {
    let dim = multi_point.dimension();
    if write_prefix(writer, GeometryType::MultiPoint, dim, multi_point.is_empty())? {
        for (i, point) in multi_point.points().iter().enumerate() {
            if i > 0 {
                writer.write_char(',')?;
            }
            match point.coord() {
                Some(coord) => {
                    writer.write_char('(')?;
                    write_coord(writer, coord)?;
                    writer.write_char(')')?;
                }
                None => writer.write_str("EMPTY")?,
            }
        }
        writer.write_char(')')?;
    }
    Ok(())
}

pub fn write_multi_line_string<W: Write>(
    writer: &mut W,
    multi_line_string: &MultiLineString,
) -> fmt::Result {
    let dim = multi_line_string.dimension();
    let is_empty = multi_line_string.is_empty();
    if write_prefix(writer, GeometryType::MultiLineString, dim, is_empty)? {
        for (i, line_string) in multi_line_string.line_strings().iter().enumerate() {
            if i > 0 {
                writer.write_char(',')?;
            }
            if line_string.is_empty() {
                writer.write_str("EMPTY")?;
            } else {
                writer.write_char('(')?;
                write_coords(writer, line_string.coords())?;
                writer.write_char(')')?;
            }
        }
        writer.write_char(')')?;
    }
    Ok(())
}

pub fn write_multi_polygon<W: Write>(writer: &mut W, multi_polygon: &MultiPolygon) -> fmt::Result {
    let dim = multi_polygon.dimension();
    if write_prefix(writer, GeometryType::MultiPolygon, dim, multi_polygon.is_empty())? {
        for (i, polygon) in multi_polygon.polygons().iter().enumerate() {
            if i > 0 {
                writer.write_char(',')?;
            }
            if polygon.is_empty() {
                writer.write_str("EMPTY")?;
            } else {
                writer.write_char('(')?;
                write_rings(writer, polygon.rings())?;
                writer.write_char(')')?;
            }
        }
        writer.write_char(')')?;
    }
    Ok(())
}

pub fn write_geometry_collection<W: Write>(
    writer: &mut W,
    geometry_collection: &GeometryCollection,
) -> fmt::Result {
    let dim = geometry_collection.dimension();
    let is_empty = geometry_collection.is_empty();
    if write_prefix(writer, GeometryType::GeometryCollection, dim, is_empty)? {
        for (i, geom) in geometry_collection.geometries().iter().enumerate() {
            if i > 0 {
                writer.write_char(',')?;
            }
            write_geometry(writer, geom)?;
        }
        writer.write_char(')')?;
    }
    Ok(())
}

/// Write any geometry as WKT.
pub fn write_geometry<W: Write>(writer: &mut W, geom: &Geometry) -> fmt::Result {
    match geom {
        Geometry::Point(g) => write_point(writer, g),
        Geometry::LineString(g) => write_line_string(writer, g),
        Geometry::Polygon(g) => write_polygon(writer, g),
        Geometry::MultiPoint(g) => write_multi_point(writer, g),
        Geometry::MultiLineString(g) => write_multi_line_string(writer, g),
        Geometry::MultiPolygon(g) => write_multi_polygon(writer, g),
        Geometry::GeometryCollection(g) => write_geometry_collection(writer, g),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{geometrycollection, linestring, multipoint, multipolygon, point, polygon};

    fn wkt(geom: impl Into<Geometry>) -> String {
        let mut out = String::new();
        write_geometry(&mut out, &geom.into()).unwrap();
        out
    }

    #[test]
    fn shortest_numbers() {
        let point = Point::try_new(Coord::xy(47., 19.2)).unwrap();
        assert_eq!(wkt(point), "POINT(47 19.2)");
        assert_eq!(wkt(linestring::ls_z()), "LINESTRING Z (0 1 2,-1.5 2.25 0.0000001)");
    }

    #[test]
    fn empties() {
        assert_eq!(wkt(Point::empty(Dimension::XY)), "POINT EMPTY");
        assert_eq!(wkt(Point::empty(Dimension::XYZ)), "POINT Z EMPTY");
        assert_eq!(
            wkt(GeometryCollection::empty(Dimension::XY)),
            "GEOMETRYCOLLECTION EMPTY"
        );
        assert_eq!(wkt(multipoint::mp_with_empty()), "MULTIPOINT(EMPTY,(3 4),(5 6))");
    }

    #[test]
    fn polygons() {
        assert_eq!(
            wkt(polygon::p1()),
            "POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 2,1 1))"
        );
        assert_eq!(
            wkt(polygon::p_z()),
            "POLYGON Z ((0 0 10,1 0 11,1 1 12,0 0 10))"
        );
        assert!(wkt(multipolygon::mp0()).starts_with("MULTIPOLYGON(((-111 45,-111 41,"));
    }

    #[test]
    fn collection() {
        assert_eq!(
            wkt(geometrycollection::gc0()),
            "GEOMETRYCOLLECTION(POINT(0 1),LINESTRING(3 4,5 6),\
             POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 2,1 1)))"
        );
        assert_eq!(wkt(point::p_z()), "POINT Z (1 2 3)");
    }
}
