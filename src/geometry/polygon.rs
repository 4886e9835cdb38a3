use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Dimension, LineString};

/// A polygon made of an exterior ring followed by zero or more holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonFields")]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dimension,
}

#[derive(Deserialize)]
struct PolygonFields {
    rings: Vec<LineString>,
    dim: Dimension,
}

impl TryFrom<PolygonFields> for Polygon {
    type Error = GeometryError;

    fn try_from(value: PolygonFields) -> Result<Self, Self::Error> {
        Self::try_new(value.rings, value.dim)
    }
}

impl Polygon {
    /// Create a new Polygon, validating the dimension and closure of every ring.
    pub fn try_new(rings: Vec<LineString>, dim: Dimension) -> Result<Self, GeometryError> {
        for ring in &rings {
            dim.check(ring.dimension())?;
            ring.validate_ring()?;
        }
        Ok(Self { rings, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self { rings: vec![], dim }
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
