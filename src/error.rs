//! Defines [`GeoCodecError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

use crate::geometry::{Dimension, GeometryType};

/// A geometry violates one of the structural invariants of the model.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    /// A ring has fewer than four coordinates.
    #[error("ring has {0} points, at least 4 are required")]
    RingTooShort(usize),

    /// A ring's first and last coordinates differ.
    #[error("ring is not closed")]
    RingNotClosed,

    /// A coordinate or child geometry has a different dimension than its parent.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },

    /// An ordinate is NaN or infinite, which none of the text formats can represent.
    #[error("ordinate {0} is not finite")]
    NonFiniteOrdinate(f64),

    /// An empty point was passed somewhere a coordinate is required.
    #[error("empty point cannot be represented here")]
    EmptyPoint,
}

/// Malformed WKT text.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("WKT parse error at byte {offset}: {message}")]
pub struct ParseError {
    /// Byte offset into the input where the error was detected.
    pub offset: usize,
    /// Human readable description, usually naming the expected token.
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Malformed or truncated WKB bytes or GML text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    /// The buffer ended before the declared structure was complete. Holds the offset of the
    /// read that failed.
    #[error("WKB buffer too short for the read at byte {0}")]
    Truncated(u64),

    /// The byte order marker was neither 0 nor 1.
    #[error("invalid WKB byte order marker {0:#04x}")]
    InvalidByteOrder(u8),

    /// The WKB type code is not one of the supported geometry types.
    #[error("unknown WKB geometry type code {0}")]
    UnknownGeometryType(u32),

    /// A homogeneous collection contained a child of the wrong type.
    #[error("{parent:?} cannot contain a {child:?}")]
    UnexpectedChild {
        parent: GeometryType,
        child: GeometryType,
    },

    /// A count that does not fit in the u32 fields of WKB.
    #[error("Overflow: {0} items do not fit in a WKB count")]
    Overflow(usize),

    /// A GML element that is not part of the supported vocabulary.
    #[error("unexpected GML element <{0}>")]
    UnexpectedElement(String),

    /// A GML document that ended or closed an element too early.
    #[error("GML structure error: {0}")]
    Structure(String),

    /// Coordinate text that is not a valid number.
    #[error("invalid number {0:?} in GML coordinates")]
    InvalidNumber(String),

    /// The decoded geometry violates a model invariant.
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [quick_xml::Error]
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoCodecError {
    /// [GeometryError]
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// [ParseError]
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// [CodecError]
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoCodecError>;
