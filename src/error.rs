//! Defines [`PostgisError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PostgisError {
    /// [hex::FromHexError]: the input was not valid hex text
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// The EWKB byte order flag was neither `0` (big endian) nor `1` (little endian)
    #[error("Invalid byte order flag: {0}")]
    InvalidByteOrder(u8),

    /// Fewer bytes were available than needed to read the named field
    #[error("Truncated EWKB input: not enough bytes to read {0}")]
    TruncatedInput(&'static str),

    /// The column value handed to a scan was not a byte sequence
    #[error("Incorrect column value type: expected bytes, found {0}")]
    TypeMismatch(String),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The EWKB type word does not name a known geometry type
    #[error("Unsupported geometry type: {0:#x}")]
    UnsupportedGeometryType(u32),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, PostgisError>;
