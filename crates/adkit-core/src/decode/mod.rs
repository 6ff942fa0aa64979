//! Descriptor-driven payload decoding.
//!
//! Every payload key is resolved through the record descriptor; nothing is
//! inferred from the payload itself. Enum-valued strings are kept as text:
//! enum groups are documentation, not field bindings.

mod primitive;


use crate::{
    config::{DecodeConfig, UnknownFieldPolicy},
    entry::Entry,
    error::{ErrorOrigin, InternalError},
    obs::{DecodeEvent, sink},
    traits::ApiContext,
    value::Value,
};
use adkit_schema::{
    node::{NodeError, Record, RecordKind, Schema},
    types::TypeTag,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error as ThisError;

///
/// DecodeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecodeError {
    #[error("payload for '{record}' must be a JSON object, found {found}")]
    NotAnObject {
        record: &'static str,
        found: &'static str,
    },

    #[error("field '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: &'static str,
    },

    #[error("field '{field}' holds an unparseable datetime '{value}'")]
    InvalidDatetime { field: String, value: String },

    #[error("field '{field}' holds {value}, which is out of range for {expected}")]
    OutOfRange {
        field: String,
        expected: &'static str,
        value: String,
    },

    #[error("field '{field}' nests deeper than {max_depth} levels")]
    NestingTooDeep { field: String, max_depth: usize },
}

///
/// Decoder
///
/// Converts raw JSON payloads into [`Entry`] values using a [`Schema`].
/// Nested record tags decode structurally when the kind is registered and
/// stay raw objects otherwise.
///

#[derive(Clone, Debug)]
pub struct Decoder<'s> {
    schema: &'s Schema,
    config: DecodeConfig,
    api: Option<Arc<dyn ApiContext>>,
}

impl<'s> Decoder<'s> {
    #[must_use]
    pub const fn new(schema: &'s Schema, config: DecodeConfig) -> Self {
        Self {
            schema,
            config,
            api: None,
        }
    }

    /// Attach the API handle given to every decoded entry, nested ones included.
    #[must_use]
    pub fn with_api(mut self, api: Arc<dyn ApiContext>) -> Self {
        self.api = Some(api);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decode a payload for the record kind named `kind`.
    pub fn decode(&self, kind: &str, payload: &JsonValue) -> Result<Entry, InternalError> {
        let record = self
            .schema
            .get_record(kind)
            .map_err(|err| InternalError::node(ErrorOrigin::Decode, err))?;

        self.decode_record(record, payload)
    }

    /// Decode a payload for a generated record kind.
    pub fn decode_kind<R: RecordKind>(&self, payload: &JsonValue) -> Result<Entry, InternalError> {
        self.decode_record(R::RECORD, payload)
    }

    /// Decode a payload against an explicit descriptor.
    pub fn decode_record(
        &self,
        record: &'static Record,
        payload: &JsonValue,
    ) -> Result<Entry, InternalError> {
        self.decode_entry(record, payload, "", 0).inspect_err(|err| {
            sink::record(DecodeEvent::DecodeFailed {
                record: record.ident,
                class: err.class,
            });
        })
    }

    fn decode_entry(
        &self,
        record: &'static Record,
        payload: &JsonValue,
        path: &str,
        depth: usize,
    ) -> Result<Entry, InternalError> {
        let JsonValue::Object(map) = payload else {
            return Err(DecodeError::NotAnObject {
                record: record.ident,
                found: json_kind(payload),
            }
            .into());
        };

        let mut entry = Entry::new(record);
        if let Some(api) = &self.api {
            entry.set_api(Some(Arc::clone(api)));
        }

        for (key, raw) in map {
            let Some(field) = record.get_field(key) else {
                match self.config.unknown_fields {
                    UnknownFieldPolicy::Reject => {
                        let err = NodeError::UnknownField {
                            record: record.ident,
                            field: join_path(path, key),
                        };
                        return Err(InternalError::node(ErrorOrigin::Decode, err));
                    }
                    UnknownFieldPolicy::Ignore => {
                        sink::record(DecodeEvent::UnknownFieldIgnored {
                            record: record.ident,
                        });
                        continue;
                    }
                }
            };

            let field_path = join_path(path, field.ident);
            let value = self.decode_value(&field.ty, raw, &field_path, depth + 1)?;
            entry.set(field.ident, value)?;
        }

        sink::record(DecodeEvent::EntryDecoded {
            record: record.ident,
            fields: entry.len() as u64,
        });

        Ok(entry)
    }

    fn decode_value(
        &self,
        tag: &TypeTag,
        raw: &JsonValue,
        path: &str,
        depth: usize,
    ) -> Result<Value, InternalError> {
        if depth > self.config.max_depth {
            return Err(DecodeError::NestingTooDeep {
                field: path.to_string(),
                max_depth: self.config.max_depth,
            }
            .into());
        }

        if raw.is_null() {
            return Ok(Value::Null);
        }

        match tag {
            TypeTag::Primitive(primitive) => {
                primitive::decode(*primitive, raw, path, &self.config).map_err(Into::into)
            }

            TypeTag::Record(name) => match (self.schema.get_record(name), raw) {
                (Ok(record), JsonValue::Object(_)) => {
                    let entry = self.decode_entry(record, raw, path, depth)?;
                    Ok(Value::Entry(Box::new(entry)))
                }
                (Err(_), JsonValue::Object(map)) => Ok(Value::Object(map.clone())),
                (_, other) => Err(mismatch(path, tag, other).into()),
            },

            TypeTag::List(item) => {
                let JsonValue::Array(items) = raw else {
                    return Err(mismatch(path, tag, raw).into());
                };

                items
                    .iter()
                    .enumerate()
                    .map(|(idx, raw)| {
                        self.decode_value(item, raw, &format!("{path}[{idx}]"), depth + 1)
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::List)
            }
        }
    }
}

/// Re-encode an entry into the JSON shape the API sends.
#[must_use]
pub fn encode(entry: &Entry) -> JsonValue {
    JsonValue::Object(entry.export_all_data())
}

pub(crate) fn mismatch(path: &str, expected: impl ToString, found: &JsonValue) -> DecodeError {
    DecodeError::TypeMismatch {
        field: path.to_string(),
        expected: expected.to_string(),
        found: json_kind(found),
    }
}

pub(crate) const fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}
