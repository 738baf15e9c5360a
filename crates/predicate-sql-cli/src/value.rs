//! Parsing argument values and printing parameters as JSON.

use predicate_sql_core::SqlValue;
use serde_json::{Number, Value};

use crate::error::{CliError, Result};

/// Parses one argument into a bindable value.
///
/// JSON scalars keep their type (`1`, `2.5`, `true`, `null`, `"7"`); text
/// that is not valid JSON is taken verbatim.
pub fn parse_value(raw: &str) -> Result<SqlValue> {
    match serde_json::from_str::<Value>(raw) {
        Ok(json) => from_json(json).ok_or_else(|| CliError::UnsupportedValue(raw.to_string())),
        Err(_) => Ok(SqlValue::Text(raw.to_string())),
    }
}

fn from_json(json: Value) -> Option<SqlValue> {
    match json {
        Value::Null => Some(SqlValue::Null),
        Value::Bool(b) => Some(SqlValue::Bool(b)),
        Value::Number(n) => n
            .as_i64()
            .map(SqlValue::Int)
            .or_else(|| n.as_f64().map(SqlValue::Float)),
        Value::String(s) => Some(SqlValue::Text(s)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses a `column=value` cursor key.
pub fn parse_key(raw: &str) -> Result<(String, SqlValue)> {
    let (column, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidKey(raw.to_string()))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(CliError::InvalidKey(raw.to_string()));
    }
    Ok((column.to_string(), parse_value(value)?))
}

/// Parses a `--row` argument: a JSON array, or comma-separated values.
pub fn parse_row(raw: &str) -> Result<Vec<SqlValue>> {
    if raw.trim_start().starts_with('[') {
        let items: Vec<Value> =
            serde_json::from_str(raw).map_err(|_| CliError::InvalidRow(raw.to_string()))?;
        return items
            .into_iter()
            .map(|item| from_json(item).ok_or_else(|| CliError::UnsupportedValue(raw.to_string())))
            .collect();
    }
    raw.split(',').map(|item| parse_value(item.trim())).collect()
}

/// Converts a bound parameter to JSON for printing.
///
/// Blobs print as arrays of byte values; non-finite floats print as `null`.
#[must_use]
pub fn to_json(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Bool(b) => Value::Bool(*b),
        SqlValue::Int(i) => Value::Number((*i).into()),
        SqlValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        SqlValue::Text(s) => Value::String(s.clone()),
        SqlValue::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
        SqlValue::Array(items) => Value::Array(items.iter().map(to_json).collect()),
    }
}
