use crate::value::Value;
use chrono::{DateTime, FixedOffset};
use serde_json::{Number, Value as JsonValue};

/// Datetime layout used by the API, e.g. `2024-03-01T12:30:00+0000`.
pub const API_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[must_use]
pub fn format_datetime(dt: &DateTime<FixedOffset>) -> String {
    dt.format(API_DATETIME_FORMAT).to_string()
}

pub(super) fn to_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Datetime(dt) => JsonValue::String(format_datetime(dt)),
        Value::Entry(entry) => JsonValue::Object(entry.export_all_data()),
        // non-finite floats have no JSON form
        Value::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::Int(i) => JsonValue::Number((*i).into()),
        Value::List(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        Value::Null => JsonValue::Null,
        Value::Object(map) => JsonValue::Object(map.clone()),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Uint(u) => JsonValue::Number((*u).into()),
    }
}
