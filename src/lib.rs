//! A small geometry interchange engine: parse and write WKT, and encode and decode WKB and GML,
//! all through one owned [`Geometry`] model.
//!
//! ```
//! use geocodec::io::{gml, wkb, wkt};
//!
//! let geom = wkt::parse_wkt("POINT(47.0 19.2)").unwrap();
//! let bytes = wkb::to_wkb(&geom).unwrap();
//! assert_eq!(bytes.len(), wkb::wkb_size(&geom));
//!
//! let (decoded, _) = wkb::from_wkb(&bytes).unwrap();
//! assert_eq!(decoded.to_string(), "POINT(47 19.2)");
//!
//! let text = gml::to_gml(&decoded).unwrap();
//! assert_eq!(gml::from_gml(&text).unwrap(), geom);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use geometry::{Coord, Dimension, Geometry, GeometryType};

pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
