use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Coord, Dimension};

/// A single position, or an empty point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointFields")]
pub struct Point {
    coord: Option<Coord>,
    dim: Dimension,
}

/// Deserialized fields of a [`Point`], checked before use.
#[derive(Deserialize)]
struct PointFields {
    coord: Option<Coord>,
    dim: Dimension,
}

impl TryFrom<PointFields> for Point {
    type Error = GeometryError;

    fn try_from(value: PointFields) -> Result<Self, Self::Error> {
        match value.coord {
            Some(coord) => {
                value.dim.check(coord.dimension())?;
                Point::try_new(coord)
            }
            None => Ok(Point::empty(value.dim)),
        }
    }
}

impl Point {
    /// Create a non-empty point. Every ordinate must be finite.
    pub fn try_new(coord: Coord) -> Result<Self, GeometryError> {
        coord.check_finite()?;
        Ok(Self::new_unchecked(coord))
    }

    /// Caller guarantees that every ordinate is finite.
    pub(crate) fn new_unchecked(coord: Coord) -> Self {
        Self {
            dim: coord.dimension(),
            coord: Some(coord),
        }
    }

    pub fn empty(dim: Dimension) -> Self {
        Self { coord: None, dim }
    }

    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    pub fn z(&self) -> Option<f64> {
        self.coord.and_then(|c| c.z)
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }
}

impl TryFrom<Coord> for Point {
    type Error = GeometryError;

    fn try_from(value: Coord) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}
