use geo::{point, MultiPoint as GeoMultiPoint};

use crate::geometry::{Dimension, MultiPoint, Point};

pub(crate) fn mp0() -> MultiPoint {
    GeoMultiPoint::new(vec![
        point!(
            x: 0., y: 1.
        ),
        point!(
            x: 1., y: 2.
        ),
    ])
    .try_into()
    .unwrap()
}

pub(crate) fn mp1() -> MultiPoint {
    GeoMultiPoint::new(vec![
        point!(
            x: 3., y: 4.
        ),
        point!(
            x: 5., y: 6.
        ),
    ])
    .try_into()
    .unwrap()
}

/// A MultiPoint whose first member is an empty point.
pub(crate) fn mp_with_empty() -> MultiPoint {
    let mut points = vec![Point::empty(Dimension::XY)];
    points.extend_from_slice(mp1().points());
    MultiPoint::try_new(points, Dimension::XY).unwrap()
}
