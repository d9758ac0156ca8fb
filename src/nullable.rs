//! [`NullablePoint`], a [`Point`] that can be SQL `NULL` or JSON `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::point::Point;
use crate::value::{ColumnValue, Scan, SqlValue, ToValue};

/// A [`Point`] paired with a validity flag.
///
/// When `valid` is `false` the point is absent and `point` must be ignored, whatever it holds.
///
/// # Scanning discards decode errors
///
/// [`Scan`] for this type never fails. A column value that cannot be decoded as a point reads
/// as `NULL`, exactly like a real `NULL`, so corrupt data is indistinguishable from missing
/// data. Each discarded error is logged at `warn` level. Use [`NullablePoint::scan_strict`] to
/// get the error instead.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullablePoint {
    /// The point, meaningful only when `valid` is `true`
    pub point: Point,
    /// Whether `point` holds a value
    pub valid: bool,
}

impl NullablePoint {
    /// A present point.
    pub fn new(point: Point) -> Self {
        Self { point, valid: true }
    }

    /// An absent point.
    pub fn null() -> Self {
        Self::default()
    }

    /// The point, if present.
    pub fn get(&self) -> Option<Point> {
        self.valid.then_some(self.point)
    }

    /// Scan a column value, returning decode errors instead of reading them as `NULL`.
    ///
    /// `NULL` still scans successfully as an absent point.
    pub fn scan_strict(value: ColumnValue<'_>) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::null());
        }
        Point::scan(value).map(Self::new)
    }

    /// Replace `self` with a point parsed from JSON.
    ///
    /// `null` makes `self` absent. On a parse error `self` is made absent too and the error is
    /// returned.
    pub fn update_from_json(&mut self, json: &str) -> Result<()> {
        match serde_json::from_str(json) {
            Ok(value) => {
                *self = value;
                Ok(())
            }
            Err(err) => {
                *self = Self::null();
                Err(err.into())
            }
        }
    }
}

impl Scan for NullablePoint {
    fn scan(value: ColumnValue<'_>) -> Result<Self> {
        match Self::scan_strict(value) {
            Ok(point) => Ok(point),
            Err(err) => {
                log::warn!("reading undecodable point column value as NULL: {err}");
                Ok(Self::null())
            }
        }
    }
}

impl ToValue for NullablePoint {
    fn to_value(&self) -> SqlValue {
        match self.get() {
            Some(point) => point.to_value(),
            None => SqlValue::Null,
        }
    }
}

impl From<Point> for NullablePoint {
    fn from(value: Point) -> Self {
        Self::new(value)
    }
}

impl From<Option<Point>> for NullablePoint {
    fn from(value: Option<Point>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }
}

impl From<NullablePoint> for Option<Point> {
    fn from(value: NullablePoint) -> Self {
        value.get()
    }
}

impl Serialize for NullablePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NullablePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<Point>::deserialize(deserializer).map(Self::from)
    }
}
