use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Dimension, Geometry, LineString, Point, Polygon};

macro_rules! impl_collection {
    ($(#[$meta:meta])* $name:ident, $fields:ident = $fields_str:literal, $child:ty, $field:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(try_from = $fields_str)]
        pub struct $name {
            $field: Vec<$child>,
            dim: Dimension,
        }

        #[derive(Deserialize)]
        struct $fields {
            $field: Vec<$child>,
            dim: Dimension,
        }

        impl TryFrom<$fields> for $name {
            type Error = GeometryError;

            fn try_from(value: $fields) -> Result<Self, Self::Error> {
                Self::try_new(value.$field, value.dim)
            }
        }

        impl $name {
            /// Create a new collection, checking that every member has dimension `dim`.
            pub fn try_new($field: Vec<$child>, dim: Dimension) -> Result<Self, GeometryError> {
                for child in &$field {
                    dim.check(child.dimension())?;
                }
                Ok(Self { $field, dim })
            }

            pub fn empty(dim: Dimension) -> Self {
                Self {
                    $field: vec![],
                    dim,
                }
            }

            /// Caller guarantees that every member has dimension `dim`.
            pub(crate) fn new_unchecked($field: Vec<$child>, dim: Dimension) -> Self {
                Self { $field, dim }
            }

            pub fn $field(&self) -> &[$child] {
                &self.$field
            }

            pub fn len(&self) -> usize {
                self.$field.len()
            }

            pub fn dimension(&self) -> Dimension {
                self.dim
            }

            pub fn is_empty(&self) -> bool {
                self.$field.is_empty()
            }
        }
    };
}

impl_collection!(
    /// A collection of points.
    MultiPoint,
    MultiPointFields = "MultiPointFields",
    Point,
    points
);
impl_collection!(
    /// A collection of line strings.
    MultiLineString,
    MultiLineStringFields = "MultiLineStringFields",
    LineString,
    line_strings
);
impl_collection!(
    /// A collection of polygons.
    MultiPolygon,
    MultiPolygonFields = "MultiPolygonFields",
    Polygon,
    polygons
);
impl_collection!(
    /// A heterogeneous collection of geometries.
    GeometryCollection,
    GeometryCollectionFields = "GeometryCollectionFields",
    Geometry,
    geometries
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;
    use crate::test::point::{p0, p1};

    #[test]
    fn members_share_dimension() {
        let multi = MultiPoint::try_new(vec![p0(), p1()], Dimension::XY).unwrap();
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.points()[1], p1());

        let err = MultiPoint::try_new(
            vec![p0(), Point::try_new(Coord::xyz(1., 2., 3.)).unwrap()],
            Dimension::XY,
        )
        .unwrap_err();
        assert!(matches!(err, GeometryError::DimensionMismatch { .. }));
    }

    #[test]
    fn empty_member_is_not_empty_collection() {
        let multi = MultiPoint::try_new(vec![Point::empty(Dimension::XY)], Dimension::XY).unwrap();
        assert!(!multi.is_empty());
        assert!(MultiPoint::empty(Dimension::XY).is_empty());
    }

    #[test]
    fn deserialize_checks_dimension() {
        let json = r#"{"points":[{"coord":{"x":1.0,"y":2.0,"z":3.0},"dim":"XYZ"}],"dim":"XY"}"#;
        assert!(serde_json::from_str::<MultiPoint>(json).is_err());

        let json = r#"{"points":[{"coord":{"x":1.0,"y":2.0,"z":null},"dim":"XY"}],"dim":"XY"}"#;
        let multi: MultiPoint = serde_json::from_str(json).unwrap();
        assert_eq!(multi.points(), &[p1()]);
    }

    #[test]
    fn nested_collection() {
        let inner = GeometryCollection::try_new(vec![p0().into()], Dimension::XY).unwrap();
        let outer =
            GeometryCollection::try_new(vec![inner.into(), p1().into()], Dimension::XY).unwrap();
        assert_eq!(outer.geometries().len(), 2);
    }
}
