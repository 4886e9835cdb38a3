use crate::geometry::{Dimension, Geometry, GeometryCollection, MultiPoint, Point};
use crate::test::{linestring, point, polygon};

pub(crate) fn gc0() -> GeometryCollection {
    GeometryCollection::try_new(
        vec![
            point::p0().into(),
            linestring::ls1().into(),
            polygon::p1().into(),
        ],
        Dimension::XY,
    )
    .unwrap()
}

/// A collection holding an empty point, an empty MultiPoint and another collection.
pub(crate) fn gc_nested() -> GeometryCollection {
    let inner: Geometry = gc0().into();
    GeometryCollection::try_new(
        vec![
            Point::empty(Dimension::XY).into(),
            MultiPoint::empty(Dimension::XY).into(),
            inner,
            point::p2().into(),
        ],
        Dimension::XY,
    )
    .unwrap()
}

pub(crate) fn gc_z() -> GeometryCollection {
    GeometryCollection::try_new(
        vec![
            point::p_z().into(),
            linestring::ls_z().into(),
            polygon::p_z().into(),
        ],
        Dimension::XYZ,
    )
    .unwrap()
}
