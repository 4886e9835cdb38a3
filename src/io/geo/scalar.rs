use crate::error::GeometryError;
use crate::geometry::{
    Coord, Dimension, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Convert a coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord<f64> {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept. `geo` has no empty point, so an empty point is an
/// error.
pub fn point_to_geo(point: &Point) -> Result<geo::Point<f64>, GeometryError> {
    point
        .coord()
        .map(|coord| geo::Point(coord_to_geo(coord)))
        .ok_or(GeometryError::EmptyPoint)
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString<f64> {
    geo::LineString::new(line_string.coords().iter().map(coord_to_geo).collect())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept. An empty polygon becomes a polygon with an empty
/// exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> Result<geo::MultiPoint<f64>, GeometryError> {
    let points = multi_point
        .points()
        .iter()
        .map(point_to_geo)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(geo::MultiPoint::new(points))
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString<f64> {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon<f64> {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> Result<geo::GeometryCollection<f64>, GeometryError> {
    let geometries = geometry_collection
        .geometries()
        .iter()
        .map(geometry_to_geo)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(geo::GeometryCollection::new_from(geometries))
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo::Geometry<f64>, GeometryError> {
    let out = match geometry {
        Geometry::Point(geom) => geo::Geometry::Point(point_to_geo(geom)?),
        Geometry::LineString(geom) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Geometry::Polygon(geom) => geo::Geometry::Polygon(polygon_to_geo(geom)),
        Geometry::MultiPoint(geom) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)?),
        Geometry::MultiLineString(geom) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom))
        }
        Geometry::MultiPolygon(geom) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)),
        Geometry::GeometryCollection(geom) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom)?)
        }
    };
    Ok(out)
}

impl TryFrom<&Geometry> for geo::Geometry<f64> {
    type Error = GeometryError;

    fn try_from(value: &Geometry) -> Result<Self, Self::Error> {
        geometry_to_geo(value)
    }
}

impl From<geo::Coord<f64>> for Coord {
    fn from(value: geo::Coord<f64>) -> Self {
        Coord::xy(value.x, value.y)
    }
}

impl TryFrom<geo::Point<f64>> for Point {
    type Error = GeometryError;

    fn try_from(value: geo::Point<f64>) -> Result<Self, Self::Error> {
        Point::try_new(value.0.into())
    }
}

impl TryFrom<geo::LineString<f64>> for LineString {
    type Error = GeometryError;

    fn try_from(value: geo::LineString<f64>) -> Result<Self, Self::Error> {
        LineString::try_new(value.0.into_iter().map(Coord::from).collect(), Dimension::XY)
    }
}

impl TryFrom<geo::Line<f64>> for LineString {
    type Error = GeometryError;

    fn try_from(value: geo::Line<f64>) -> Result<Self, Self::Error> {
        LineString::try_new(vec![value.start.into(), value.end.into()], Dimension::XY)
    }
}

impl TryFrom<geo::Polygon<f64>> for Polygon {
    type Error = GeometryError;

    /// `geo` closes rings implicitly, but may hold rings with fewer than four points.
    fn try_from(value: geo::Polygon<f64>) -> Result<Self, Self::Error> {
        let (exterior, interiors) = value.into_inner();
        if exterior.0.is_empty() && interiors.is_empty() {
            return Ok(Polygon::empty(Dimension::XY));
        }
        let rings = std::iter::once(exterior)
            .chain(interiors)
            .map(LineString::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Polygon::try_new(rings, Dimension::XY)
    }
}

impl TryFrom<geo::MultiPoint<f64>> for MultiPoint {
    type Error = GeometryError;

    fn try_from(value: geo::MultiPoint<f64>) -> Result<Self, Self::Error> {
        let points = value
            .0
            .into_iter()
            .map(Point::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiPoint::new_unchecked(points, Dimension::XY))
    }
}

impl TryFrom<geo::MultiLineString<f64>> for MultiLineString {
    type Error = GeometryError;

    fn try_from(value: geo::MultiLineString<f64>) -> Result<Self, Self::Error> {
        let line_strings = value
            .0
            .into_iter()
            .map(LineString::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiLineString::new_unchecked(line_strings, Dimension::XY))
    }
}

impl TryFrom<geo::MultiPolygon<f64>> for MultiPolygon {
    type Error = GeometryError;

    fn try_from(value: geo::MultiPolygon<f64>) -> Result<Self, Self::Error> {
        let polygons = value
            .0
            .into_iter()
            .map(Polygon::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiPolygon::new_unchecked(polygons, Dimension::XY))
    }
}

impl TryFrom<geo::GeometryCollection<f64>> for GeometryCollection {
    type Error = GeometryError;

    fn try_from(value: geo::GeometryCollection<f64>) -> Result<Self, Self::Error> {
        let geometries = value
            .0
            .into_iter()
            .map(Geometry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GeometryCollection::new_unchecked(geometries, Dimension::XY))
    }
}

impl TryFrom<geo::Geometry<f64>> for Geometry {
    type Error = GeometryError;

    /// `Line`, `Rect` and `Triangle` become a LineString or Polygon.
    fn try_from(value: geo::Geometry<f64>) -> Result<Self, Self::Error> {
        let out = match value {
            geo::Geometry::Point(g) => Point::try_from(g)?.into(),
            geo::Geometry::Line(g) => LineString::try_from(g)?.into(),
            geo::Geometry::LineString(g) => LineString::try_from(g)?.into(),
            geo::Geometry::Polygon(g) => Polygon::try_from(g)?.into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::try_from(g)?.into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::try_from(g)?.into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::try_from(g)?.into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::try_from(g)?.into(),
            geo::Geometry::Rect(g) => Polygon::try_from(g.to_polygon())?.into(),
            geo::Geometry::Triangle(g) => Polygon::try_from(g.to_polygon())?.into(),
        };
        Ok(out)
    }
}
