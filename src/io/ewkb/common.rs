use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::PostgisError;

/// EWKB flag set on the type word when Z ordinates follow X and Y
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// EWKB flag set on the type word when M ordinates follow X and Y (and Z)
pub const EWKB_M_FLAG: u32 = 0x4000_0000;
/// EWKB flag set on the type word when a 4-byte SRID follows it
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// The geometry types of the OGC WKB specification
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = PostgisError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(PostgisError::InvalidByteOrder(other)),
        }
    }
}
