//! Geometry fixtures shared by the unit tests.

use crate::geometry::{
    Dimension, Geometry, GeometryCollection, LineString, MultiPoint, Point, Polygon,
};

pub(crate) mod geometrycollection;
pub(crate) mod multipoint;
pub(crate) mod multipolygon;
pub(crate) mod polygon;

/// One geometry of every type, in both dimensions, plus empty and nested edge cases.
pub(crate) fn all_geometries() -> Vec<Geometry> {
    vec![
        point::p0().into(),
        point::p_z().into(),
        Point::empty(Dimension::XY).into(),
        Point::empty(Dimension::XYZ).into(),
        linestring::ls0().into(),
        linestring::ls_z().into(),
        LineString::empty(Dimension::XY).into(),
        polygon::p0().into(),
        polygon::p1().into(),
        polygon::p_z().into(),
        Polygon::empty(Dimension::XY).into(),
        multipoint::mp0().into(),
        multipoint::mp_with_empty().into(),
        MultiPoint::empty(Dimension::XYZ).into(),
        multilinestring::ml0().into(),
        multipolygon::mp0().into(),
        geometrycollection::gc0().into(),
        geometrycollection::gc_nested().into(),
        geometrycollection::gc_z().into(),
        GeometryCollection::empty(Dimension::XY).into(),
    ]
}
