//! Convert to and from [`geo`] geometries.

mod scalar;

pub use scalar::{
    coord_to_geo, geometry_collection_to_geo, geometry_to_geo, line_string_to_geo,
    multi_line_string_to_geo, multi_point_to_geo, multi_polygon_to_geo, point_to_geo,
    polygon_to_geo,
};
