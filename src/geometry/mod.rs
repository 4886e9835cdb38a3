//! The in-memory geometry model shared by every format in this crate.
//!
//! A [`Geometry`] is a tree: each node exclusively owns its children and coordinates, and every
//! node records its [`Dimension`] so that empty geometries keep their dimensionality. The model
//! is immutable once built; the fallible `try_new` constructors enforce its invariants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

mod collection;
mod coord;
mod linestring;
mod point;
mod polygon;

pub use collection::{GeometryCollection, MultiLineString, MultiPoint, MultiPolygon};
pub use coord::Coord;
pub use linestring::{LineString, MIN_RING_COORDS};
pub use point::Point;
pub use polygon::Polygon;

/// Decoders reject geometries nested deeper than this instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The coordinate dimension of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    #[default]
    XY,
    XYZ,
}

impl Dimension {
    /// The number of ordinates in each coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
        }
    }

    pub fn from_size(size: usize) -> Option<Self> {
        match size {
            2 => Some(Dimension::XY),
            3 => Some(Dimension::XYZ),
            _ => None,
        }
    }

    pub(crate) fn check(&self, found: Dimension) -> Result<(), GeometryError> {
        if *self == found {
            Ok(())
        } else {
            Err(GeometryError::DimensionMismatch {
                expected: *self,
                found,
            })
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::XY => f.write_str("XY"),
            Dimension::XYZ => f.write_str("XYZ"),
        }
    }
}

/// The variant tag of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The upper-case WKT keyword for this type.
    pub fn wkt_name(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

/// Any geometry of this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dimension(),
            Geometry::LineString(g) => g.dimension(),
            Geometry::Polygon(g) => g.dimension(),
            Geometry::MultiPoint(g) => g.dimension(),
            Geometry::MultiLineString(g) => g.dimension(),
            Geometry::MultiPolygon(g) => g.dimension(),
            Geometry::GeometryCollection(g) => g.dimension(),
        }
    }

    /// Whether this geometry has no coordinates (Point, LineString) or no children (all others).
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// The number of direct children: rings of a Polygon, members of a collection.
    ///
    /// Points and LineStrings have no child geometries.
    pub fn child_count(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) => 0,
            Geometry::Polygon(g) => g.rings().len(),
            Geometry::MultiPoint(g) => g.len(),
            Geometry::MultiLineString(g) => g.len(),
            Geometry::MultiPolygon(g) => g.len(),
            Geometry::GeometryCollection(g) => g.len(),
        }
    }

    /// Iterate over every coordinate of this geometry in depth-first order.
    pub fn coords(&self) -> Box<dyn Iterator<Item = &Coord> + '_> {
        match self {
            Geometry::Point(g) => Box::new(g.coord().into_iter()),
            Geometry::LineString(g) => Box::new(g.coords().iter()),
            Geometry::Polygon(g) => Box::new(g.rings().iter().flat_map(|r| r.coords().iter())),
            Geometry::MultiPoint(g) => Box::new(g.points().iter().filter_map(|p| p.coord())),
            Geometry::MultiLineString(g) => {
                Box::new(g.line_strings().iter().flat_map(|l| l.coords().iter()))
            }
            Geometry::MultiPolygon(g) => Box::new(
                g.polygons()
                    .iter()
                    .flat_map(|p| p.rings().iter())
                    .flat_map(|r| r.coords().iter()),
            ),
            Geometry::GeometryCollection(g) => {
                Box::new(g.geometries().iter().flat_map(|child| child.coords()))
            }
        }
    }

    pub fn num_coords(&self) -> usize {
        self.coords().count()
    }

    /// The `index`'th coordinate in the order of [`Geometry::coords`].
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        self.coords().nth(index).copied()
    }
}

macro_rules! impl_from_variant {
    ($variant:ident) => {
        impl From<$variant> for Geometry {
            fn from(value: $variant) -> Self {
                Geometry::$variant(value)
            }
        }
    };
}

impl_from_variant!(Point);
impl_from_variant!(LineString);
impl_from_variant!(Polygon);
impl_from_variant!(MultiPoint);
impl_from_variant!(MultiLineString);
impl_from_variant!(MultiPolygon);
impl_from_variant!(GeometryCollection);
