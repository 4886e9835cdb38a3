use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Dimension;

/// A single coordinate tuple, either 2D or 3D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coord {
    /// Construct a 2D coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Construct a 3D coordinate.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Build a coordinate from 2 or 3 ordinates. Returns `None` for any other length.
    pub fn from_ordinates(ordinates: &[f64]) -> Option<Self> {
        match *ordinates {
            [x, y] => Some(Self::xy(x, y)),
            [x, y, z] => Some(Self::xyz(x, y, z)),
            _ => None,
        }
    }

    pub fn dimension(&self) -> Dimension {
        if self.z.is_some() {
            Dimension::XYZ
        } else {
            Dimension::XY
        }
    }

    /// Access the n'th (0-based) ordinate.
    pub fn nth(&self, n: usize) -> Option<f64> {
        match n {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => self.z,
            _ => None,
        }
    }

    /// Iterate over the 2 or 3 ordinates of this coordinate.
    pub fn ordinates(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.dimension().size()).filter_map(|n| self.nth(n))
    }

    /// Whether every ordinate is NaN, the WKB convention for an empty point.
    pub fn is_nan(&self) -> bool {
        self.ordinates().all(f64::is_nan)
    }

    /// Fails on the first NaN or infinite ordinate.
    pub fn check_finite(&self) -> Result<(), GeometryError> {
        match self.ordinates().find(|v| !v.is_finite()) {
            Some(v) => Err(GeometryError::NonFiniteOrdinate(v)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_ordinates() {
        assert_eq!(Coord::from_ordinates(&[1., 2.]), Some(Coord::xy(1., 2.)));
        assert_eq!(
            Coord::from_ordinates(&[1., 2., 3.]),
            Some(Coord::xyz(1., 2., 3.))
        );
        assert_eq!(Coord::from_ordinates(&[1.]), None);
        assert_eq!(Coord::from_ordinates(&[1., 2., 3., 4.]), None);
    }

    #[test]
    fn ordinates() {
        let coord = Coord::xyz(1., 2., 3.);
        assert_eq!(coord.ordinates().collect::<Vec<_>>(), vec![1., 2., 3.]);
        assert_eq!(coord.dimension(), Dimension::XYZ);
        assert_eq!(Coord::xy(1., 2.).nth(2), None);
    }

    #[test]
    fn nan() {
        assert!(Coord::xy(f64::NAN, f64::NAN).is_nan());
        assert!(!Coord::xy(f64::NAN, 0.).is_nan());
    }

    #[test]
    fn finite() {
        assert!(Coord::xyz(1., -2., 1e300).check_finite().is_ok());
        assert_eq!(
            Coord::xy(f64::INFINITY, 1.).check_finite(),
            Err(GeometryError::NonFiniteOrdinate(f64::INFINITY))
        );
        assert!(matches!(
            Coord::xyz(0., 0., f64::NAN).check_finite(),
            Err(GeometryError::NonFiniteOrdinate(v)) if v.is_nan()
        ));
    }
}
