use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::geometry::{Dimension, GeometryType};

/// The legacy "2.5D" flag marking a Z geometry in the high bit of the type code.
pub const WKB_25D_FLAG: u32 = 0x8000_0000;

/// The number of bytes in a WKB header: byte order plus geometry type.
pub const HEADER_BYTES: usize = 1 + 4;

/// The ISO WKB geometry type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
    PointZ = 1001,
    LineStringZ = 1002,
    PolygonZ = 1003,
    MultiPointZ = 1004,
    MultiLineStringZ = 1005,
    MultiPolygonZ = 1006,
    GeometryCollectionZ = 1007,
}

impl WKBType {
    pub fn new(geometry_type: GeometryType, dim: Dimension) -> Self {
        use GeometryType::*;
        match (geometry_type, dim) {
            (Point, Dimension::XY) => WKBType::Point,
            (LineString, Dimension::XY) => WKBType::LineString,
            (Polygon, Dimension::XY) => WKBType::Polygon,
            (MultiPoint, Dimension::XY) => WKBType::MultiPoint,
            (MultiLineString, Dimension::XY) => WKBType::MultiLineString,
            (MultiPolygon, Dimension::XY) => WKBType::MultiPolygon,
            (GeometryCollection, Dimension::XY) => WKBType::GeometryCollection,
            (Point, Dimension::XYZ) => WKBType::PointZ,
            (LineString, Dimension::XYZ) => WKBType::LineStringZ,
            (Polygon, Dimension::XYZ) => WKBType::PolygonZ,
            (MultiPoint, Dimension::XYZ) => WKBType::MultiPointZ,
            (MultiLineString, Dimension::XYZ) => WKBType::MultiLineStringZ,
            (MultiPolygon, Dimension::XYZ) => WKBType::MultiPolygonZ,
            (GeometryCollection, Dimension::XYZ) => WKBType::GeometryCollectionZ,
        }
    }

    /// Parse a type code, accepting both ISO Z codes and the legacy 2.5D flag.
    pub fn from_code(code: u32) -> Result<Self, CodecError> {
        let iso_code = if code & WKB_25D_FLAG != 0 {
            (code & !WKB_25D_FLAG).saturating_add(1000)
        } else {
            code
        };
        Self::try_from_primitive(iso_code).map_err(|_| CodecError::UnknownGeometryType(code))
    }

    pub fn geometry_type(&self) -> GeometryType {
        match u32::from(*self) % 1000 {
            1 => GeometryType::Point,
            2 => GeometryType::LineString,
            3 => GeometryType::Polygon,
            4 => GeometryType::MultiPoint,
            5 => GeometryType::MultiLineString,
            6 => GeometryType::MultiPolygon,
            _ => GeometryType::GeometryCollection,
        }
    }

    pub fn dimension(&self) -> Dimension {
        if u32::from(*self) > 1000 {
            Dimension::XYZ
        } else {
            Dimension::XY
        }
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(CodecError::InvalidByteOrder(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// Ties a [`byteorder`] type to its WKB byte order marker.
pub(crate) trait WkbByteOrder: ByteOrder {
    const ENDIANNESS: Endianness;
}

impl WkbByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::LittleEndian;
}

impl WkbByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::BigEndian;
}
