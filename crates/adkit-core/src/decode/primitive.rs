use crate::{
    config::DecodeConfig,
    decode::{DecodeError, mismatch},
    value::{API_DATETIME_FORMAT, Value},
};
use adkit_primitives::{JsonFamily, Primitive};
use chrono::{DateTime, FixedOffset};
use serde_json::{Number, Value as JsonValue};
use std::num::IntErrorKind;

/// Convert one non-null JSON value under a primitive tag.
pub(super) fn decode(
    primitive: Primitive,
    raw: &JsonValue,
    path: &str,
    config: &DecodeConfig,
) -> Result<Value, DecodeError> {
    let coerce = config.coerce_numeric_strings && primitive.accepts_text_form();

    match (primitive.family(), raw) {
        (JsonFamily::Bool, JsonValue::Bool(b)) => Ok(Value::Bool(*b)),
        (JsonFamily::Text, JsonValue::String(s)) => Ok(Value::Text(s.clone())),
        (JsonFamily::Object, JsonValue::Object(map)) => Ok(Value::Object(map.clone())),
        (JsonFamily::Number, JsonValue::Number(n)) => decode_number(primitive, n, raw, path),
        (JsonFamily::Number, JsonValue::String(s)) if coerce => {
            decode_numeric_text(primitive, s, raw, path)
        }
        (JsonFamily::Temporal, JsonValue::String(s)) => parse_datetime(s, coerce)
            .map(Value::Datetime)
            .ok_or_else(|| DecodeError::InvalidDatetime {
                field: path.to_string(),
                value: s.clone(),
            }),
        (JsonFamily::Temporal, JsonValue::Number(n)) => {
            let secs = n.as_i64().ok_or_else(|| mismatch(path, primitive, raw))?;

            from_epoch(secs)
                .map(Value::Datetime)
                .ok_or_else(|| out_of_range(path, primitive, n))
        }

        _ => Err(mismatch(path, primitive, raw)),
    }
}

fn decode_number(
    primitive: Primitive,
    n: &Number,
    raw: &JsonValue,
    path: &str,
) -> Result<Value, DecodeError> {
    let integer = n.as_i64().map(i128::from).or_else(|| n.as_u64().map(i128::from));

    match (primitive, integer) {
        (Primitive::Int, Some(v)) => fit(v, Value::Int, path, primitive),
        (Primitive::UnsignedInt, Some(v)) => fit(v, Value::Uint, path, primitive),
        (Primitive::Float, _) => n
            .as_f64()
            .map(Value::Float)
            .ok_or_else(|| mismatch(path, primitive, raw)),
        _ => Err(mismatch(path, primitive, raw)),
    }
}

fn decode_numeric_text(
    primitive: Primitive,
    s: &str,
    raw: &JsonValue,
    path: &str,
) -> Result<Value, DecodeError> {
    if primitive == Primitive::Float {
        return s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::Float)
            .ok_or_else(|| mismatch(path, primitive, raw));
    }

    let v = match integer_text(s) {
        IntegerText::Value(v) => v,
        IntegerText::Overflow => return Err(out_of_range(path, primitive, s.trim())),
        IntegerText::Invalid => return Err(mismatch(path, primitive, raw)),
    };

    match primitive {
        Primitive::UnsignedInt => fit(v, Value::Uint, path, primitive),
        _ => fit(v, Value::Int, path, primitive),
    }
}

// narrow a parsed integer into the tag's range
fn fit<T: TryFrom<i128>>(
    v: i128,
    wrap: impl FnOnce(T) -> Value,
    path: &str,
    primitive: Primitive,
) -> Result<Value, DecodeError> {
    T::try_from(v)
        .map(wrap)
        .map_err(|_| out_of_range(path, primitive, v))
}

///
/// IntegerText
///
/// Classification of a decimal integer string. `Overflow` is a well-formed
/// integer too large for any supported tag.
///

enum IntegerText {
    Value(i128),
    Overflow,
    Invalid,
}

// decimal integers only; no exponent, no fraction
fn integer_text(s: &str) -> IntegerText {
    match s.trim().parse::<i128>() {
        Ok(v) => IntegerText::Value(v),
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            IntegerText::Overflow
        }
        Err(_) => IntegerText::Invalid,
    }
}

/// Parse an API datetime: the API layout first, then RFC 3339, then integer
/// epoch seconds when numeric strings are accepted.
pub(crate) fn parse_datetime(s: &str, coerce: bool) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, API_DATETIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .or_else(|| {
            coerce
                .then(|| s.trim().parse::<i64>().ok().and_then(from_epoch))
                .flatten()
        })
}

fn from_epoch(secs: i64) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.fixed_offset())
}

fn out_of_range(path: &str, primitive: Primitive, value: impl ToString) -> DecodeError {
    DecodeError::OutOfRange {
        field: path.to_string(),
        expected: primitive.wire_name(),
        value: value.to_string(),
    }
}
