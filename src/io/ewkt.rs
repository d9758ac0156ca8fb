//! Writing points as PostGIS extended WKT (EWKT).

use std::fmt::{self, Write};

use crate::point::{Point, SRID};

/// Write `SRID=4326;POINT(<lng> <lat>)`.
///
/// Ordinates use the shortest decimal that parses back to the same `f64`, never an exponent.
pub fn write_point<W: Write>(writer: &mut W, point: &Point) -> fmt::Result {
    write!(writer, "SRID={};POINT({} {})", SRID, point.lng, point.lat)
}
