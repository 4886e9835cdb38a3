//! Reading and writing ISO-flavored WKB-encoded geometries.
//!
//! Z geometries use the ISO type codes (1001 to 1007). The legacy high-bit Z flag is accepted
//! when decoding but never written.

mod api;
mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{
    from_wkb, from_wkb_sequence, to_wkb, to_wkb_with_options, write_wkb, WkbWriteOptions,
};
pub use common::{Endianness, WKBType, HEADER_BYTES, WKB_25D_FLAG};
pub use writer::wkb_size;
