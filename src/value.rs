//! The contract between a database driver and the types in this crate.
//!
//! A driver hands over a [`ColumnValue`] for every column it reads and accepts a [`SqlValue`]
//! for every parameter it binds. Types implement [`Scan`] to be read from a column and
//! [`ToValue`] to be written into one.

use crate::error::{PostgisError, Result};

/// An opaque column value as delivered by the database driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnValue<'a> {
    /// Hex encoded EWKB text, the way a geometry column reads through the text protocol
    Bytes(&'a [u8]),
    /// Raw EWKB, the way a geometry column reads through the binary protocol
    Binary(&'a [u8]),
    /// SQL `NULL`
    Null,
    /// Any other kind of value, named by its type
    Other(&'a str),
}

impl<'a> ColumnValue<'a> {
    /// Returns `true` for SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    pub(crate) fn type_mismatch(&self) -> PostgisError {
        let found = match self {
            ColumnValue::Bytes(_) => "hex bytes",
            ColumnValue::Binary(_) => "binary bytes",
            ColumnValue::Null => "NULL",
            ColumnValue::Other(name) => *name,
        };
        PostgisError::TypeMismatch(found.to_string())
    }
}

impl<'a> From<&'a [u8]> for ColumnValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        ColumnValue::Bytes(value)
    }
}

impl<'a> From<Option<&'a [u8]>> for ColumnValue<'a> {
    fn from(value: Option<&'a [u8]>) -> Self {
        value.map_or(ColumnValue::Null, ColumnValue::Bytes)
    }
}

/// A value ready to be bound as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Bind as text; the database casts it to the column type
    Text(String),
    /// Bind SQL `NULL`
    Null,
}

impl SqlValue {
    /// Returns `true` for SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Types that can be read from a database column.
pub trait Scan: Sized {
    /// Build a value from a column value.
    fn scan(value: ColumnValue<'_>) -> Result<Self>;

    /// Replace `self` with the scanned value.
    ///
    /// On error `self` is left untouched.
    fn scan_into(&mut self, value: ColumnValue<'_>) -> Result<()> {
        *self = Self::scan(value)?;
        Ok(())
    }
}

/// Types that can be bound as a query parameter.
pub trait ToValue {
    /// The value to bind.
    fn to_value(&self) -> SqlValue;
}
