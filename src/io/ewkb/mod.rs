//! Reading PostGIS extended WKB (EWKB) points.
//!
//! There is no writer: points are always sent to the database as EWKT text.

mod common;
mod reader;

pub use common::{Endianness, WKBType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
pub use reader::{read_hex_point, read_point, read_point_with_header, EwkbHeader};
