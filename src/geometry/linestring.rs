use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Coord, Dimension};

/// The minimum number of coordinates in a polygon ring.
pub const MIN_RING_COORDS: usize = 4;

/// An ordered sequence of coordinates sharing one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineStringFields")]
pub struct LineString {
    coords: Vec<Coord>,
    dim: Dimension,
}

#[derive(Deserialize)]
struct LineStringFields {
    coords: Vec<Coord>,
    dim: Dimension,
}

impl TryFrom<LineStringFields> for LineString {
    type Error = GeometryError;

    fn try_from(value: LineStringFields) -> Result<Self, Self::Error> {
        Self::try_new(value.coords, value.dim)
    }
}

impl LineString {
    /// Create a new LineString, checking that every coordinate is finite and has dimension
    /// `dim`.
    pub fn try_new(coords: Vec<Coord>, dim: Dimension) -> Result<Self, GeometryError> {
        for coord in &coords {
            dim.check(coord.dimension())?;
            coord.check_finite()?;
        }
        Ok(Self { coords, dim })
    }

    pub fn empty(dim: Dimension) -> Self {
        Self {
            coords: vec![],
            dim,
        }
    }

    /// Caller guarantees that every coordinate has dimension `dim`.
    pub(crate) fn new_unchecked(coords: Vec<Coord>, dim: Dimension) -> Self {
        Self { coords, dim }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn coord(&self, i: usize) -> Option<&Coord> {
        self.coords.get(i)
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Whether the first and last coordinates are equal.
    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    /// Check that this LineString can be used as a polygon ring.
    ///
    /// Rings are never closed implicitly.
    pub fn validate_ring(&self) -> Result<(), GeometryError> {
        if self.coords.len() < MIN_RING_COORDS {
            return Err(GeometryError::RingTooShort(self.coords.len()));
        }
        if !self.is_closed() {
            return Err(GeometryError::RingNotClosed);
        }
        Ok(())
    }
}
