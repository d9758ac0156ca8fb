//! `sqlx` support for reading and writing points in PostGIS `geometry` columns.
//!
//! Both [`Point`] and [`NullablePoint`] decode from `geometry` and `geography` columns, through
//! either wire format: the text format carries hex encoded EWKB, the binary format raw EWKB.
//! They encode as EWKT bound as `text`, which PostGIS casts implicitly when the target is a
//! geometry column. `Option<Point>` works as well through `sqlx`'s own `NULL` handling.

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueFormat, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type, TypeInfo, ValueRef};

use crate::nullable::NullablePoint;
use crate::point::Point;
use crate::value::{ColumnValue, Scan, SqlValue, ToValue};

fn geometry_type_info() -> PgTypeInfo {
    PgTypeInfo::with_name("geometry")
}

fn is_geometry(ty: &PgTypeInfo) -> bool {
    matches!(ty.name(), "geometry" | "geography")
}

fn column_value<'r>(value: &PgValueRef<'r>) -> Result<ColumnValue<'r>, BoxDynError> {
    if value.is_null() {
        return Ok(ColumnValue::Null);
    }
    let bytes = value.as_bytes()?;
    Ok(match value.format() {
        PgValueFormat::Text => ColumnValue::Bytes(bytes),
        PgValueFormat::Binary => ColumnValue::Binary(bytes),
    })
}

fn encode_value(value: SqlValue, buf: &mut PgArgumentBuffer) -> IsNull {
    match value {
        SqlValue::Text(ewkt) => <&str as Encode<'_, Postgres>>::encode(ewkt.as_str(), buf),
        SqlValue::Null => IsNull::Yes,
    }
}

impl Type<Postgres> for Point {
    fn type_info() -> PgTypeInfo {
        geometry_type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        is_geometry(ty)
    }
}

impl<'r> Decode<'r, Postgres> for Point {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(Point::scan(column_value(&value)?)?)
    }
}

impl Encode<'_, Postgres> for Point {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        encode_value(self.to_value(), buf)
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(<&str as Type<Postgres>>::type_info())
    }
}

impl Type<Postgres> for NullablePoint {
    fn type_info() -> PgTypeInfo {
        geometry_type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        is_geometry(ty)
    }
}

impl<'r> Decode<'r, Postgres> for NullablePoint {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(NullablePoint::scan(column_value(&value)?)?)
    }
}

impl Encode<'_, Postgres> for NullablePoint {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        encode_value(self.to_value(), buf)
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(<&str as Type<Postgres>>::type_info())
    }
}
