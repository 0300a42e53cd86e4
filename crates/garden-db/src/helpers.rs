//! Row-to-entity parsing helpers and small write utilities.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column holding an ISO date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty value is not a valid date.
pub fn get_opt_date(row: &libsql::Row, idx: i32) -> Result<Option<NaiveDate>, DatabaseError> {
    get_opt_string(row, idx)?
        .map(|s| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT)
                .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
        })
        .transpose()
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read a nullable INTEGER column that holds a 16-bit value.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored integer is out of range.
pub fn get_opt_i16(row: &libsql::Row, idx: i32) -> Result<Option<i16>, DatabaseError> {
    row.get::<Option<i64>>(idx)?
        .map(|v| {
            i16::try_from(v)
                .map_err(|_| DatabaseError::Query(format!("Integer {v} out of range for column {idx}")))
        })
        .transpose()
}

/// Timestamp for a mutation of a record last touched at `previous`.
///
/// Strictly later than `previous` even if the clock has not advanced.
#[must_use]
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous + TimeDelta::microseconds(1))
}

/// SQL value for optional text, trimmed; blank text is stored as NULL.
#[must_use]
pub fn text_value(value: Option<&str>) -> libsql::Value {
    garden_core::schema::normalize_optional(value)
        .map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

#[must_use]
pub fn date_value(value: Option<NaiveDate>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |d| {
        libsql::Value::Text(d.format(DATE_FORMAT).to_string())
    })
}

#[must_use]
pub fn i16_value(value: Option<i16>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |v| libsql::Value::Integer(i64::from(v)))
}

#[must_use]
pub fn f64_value(value: Option<f64>) -> libsql::Value {
    value.map_or(libsql::Value::Null, libsql::Value::Real)
}

#[must_use]
pub fn id_value(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| libsql::Value::Text(s.to_string()))
}

#[must_use]
pub fn bool_value(value: bool) -> libsql::Value {
    libsql::Value::Integer(i64::from(value))
}
