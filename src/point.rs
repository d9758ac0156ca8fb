//! The [`Point`] coordinate and its text and JSON representations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::{ewkb, ewkt};
use crate::value::{ColumnValue, Scan, SqlValue, ToValue};

/// The spatial reference identifier written into every EWKT string (WGS 84).
pub const SRID: i32 = 4326;

/// A geographic point stored in a PostGIS `geometry(Point, 4326)` column.
///
/// Latitude and longitude are not range checked. In EWKB and EWKT the longitude is the X
/// ordinate and the latitude is the Y ordinate.
///
/// Serializes to JSON as `{"lat":<number>,"lng":<number>}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude, the Y ordinate
    pub lat: f64,
    /// Longitude, the X ordinate
    pub lng: f64,
}

impl Point {
    /// Create a new point from a latitude and a longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Decode a point from hex encoded EWKB, as PostGIS prints a geometry column.
    ///
    /// ```
    /// use postgis_point::Point;
    ///
    /// let point = Point::from_hex_ewkb(b"0101000020E51000000000000000000040000000000000F03F").unwrap();
    /// assert_eq!(point, Point::new(1.0, 2.0));
    /// ```
    pub fn from_hex_ewkb(hex: &[u8]) -> Result<Self> {
        ewkb::read_hex_point(hex)
    }

    /// Decode a point from raw (not hex encoded) EWKB.
    pub fn from_ewkb(buf: &[u8]) -> Result<Self> {
        ewkb::read_point(buf)
    }

    /// Format this point as `SRID=4326;POINT(<lng> <lat>)`.
    pub fn to_ewkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ewkt::write_point(f, self)
    }
}

impl Scan for Point {
    fn scan(value: ColumnValue<'_>) -> Result<Self> {
        match value {
            ColumnValue::Bytes(hex) => ewkb::read_hex_point(hex),
            ColumnValue::Binary(buf) => ewkb::read_point(buf),
            other => Err(other.type_mismatch()),
        }
    }
}

impl ToValue for Point {
    fn to_value(&self) -> SqlValue {
        SqlValue::Text(self.to_ewkt())
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(value: Point) -> Self {
        geo::Point::new(value.lng, value.lat)
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(value: geo::Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(value: geo::Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}
