use geo::polygon;

use crate::geometry::{Coord, Dimension, LineString, Polygon};

pub(crate) fn p0() -> Polygon {
    polygon![
        (x: 0., y: 0.),
        (x: 4., y: 0.),
        (x: 4., y: 4.),
        (x: 0., y: 4.),
        (x: 0., y: 0.),
    ]
    .try_into()
    .unwrap()
}

/// A square with one square hole.
pub(crate) fn p1() -> Polygon {
    polygon!(
        exterior: [
            (x: 0., y: 0.),
            (x: 4., y: 0.),
            (x: 4., y: 4.),
            (x: 0., y: 4.),
            (x: 0., y: 0.),
        ],
        interiors: [
            [
                (x: 1., y: 1.),
                (x: 2., y: 1.),
                (x: 2., y: 2.),
                (x: 1., y: 2.),
                (x: 1., y: 1.),
            ],
        ],
    )
    .try_into()
    .unwrap()
}

pub(crate) fn p_z() -> Polygon {
    let ring = LineString::try_new(
        vec![
            Coord::xyz(0., 0., 10.),
            Coord::xyz(1., 0., 11.),
            Coord::xyz(1., 1., 12.),
            Coord::xyz(0., 0., 10.),
        ],
        Dimension::XYZ,
    )
    .unwrap();
    Polygon::try_new(vec![ring], Dimension::XYZ).unwrap()
}
