//! Readers and writers for the formats a [`Point`](crate::Point) travels in: hex encoded
//! EWKB from the database, EWKT text to the database, and the `sqlx` driver glue.

pub mod ewkb;
pub mod ewkt;
#[cfg(feature = "postgis")]
pub mod postgis;
