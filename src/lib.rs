//! A latitude/longitude [`Point`] that reads from and writes to PostGIS `geometry(Point, 4326)`
//! columns, plus [`NullablePoint`] for columns that can be `NULL`.
//!
//! Points are read from hex encoded (or raw) EWKB and written as EWKT text. Both types also
//! serialize to JSON as `{"lat": .., "lng": ..}`. Database drivers plug in through the [`Scan`]
//! and [`ToValue`] traits; with the `postgis` feature the types work directly with `sqlx`.
//!
//! ```
//! use postgis_point::{ColumnValue, NullablePoint, Point, Scan, ToValue};
//!
//! let hex = b"0101000020E51000000000000000000040000000000000F03F";
//! let point = Point::scan(ColumnValue::Bytes(hex)).unwrap();
//! assert_eq!(point.to_string(), "SRID=4326;POINT(2 1)");
//!
//! let missing = NullablePoint::scan(ColumnValue::Null).unwrap();
//! assert!(missing.to_value().is_null());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{PostgisError, Result};
pub use nullable::NullablePoint;
pub use point::{Point, SRID};
pub use value::{ColumnValue, Scan, SqlValue, ToValue};

pub mod error;
pub mod io;
pub mod nullable;
pub mod point;
pub mod value;
