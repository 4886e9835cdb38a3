//! Readers and writers for WKT, WKB and GML, plus interoperability with the `geo` crate.

pub mod geo;
pub mod gml;
pub mod wkb;
pub mod wkt;
