mod json;

#[cfg(test)]
mod tests;

use crate::entry::Entry;
use adkit_primitives::Primitive;
use adkit_schema::types::TypeTag;
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

// re-exports
pub use json::{API_DATETIME_FORMAT, format_datetime};

///
/// Value
///
/// Decoded field value.
///
/// Null   → the field was present in the payload as JSON `null`.
/// Object → an untyped JSON object; also carries nested record kinds that
///          are not registered in the decoding schema.
///

#[derive(Clone, Debug, PartialEq)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Datetime(DateTime<FixedOffset>),
    Entry(Box<Entry>),
    Float(f64),
    Int(i64),
    List(Vec<Self>),
    Null,
    Object(Map<String, JsonValue>),
    Text(String),
    Uint(u64),
}

impl Value {
    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Datetime(_) => "datetime",
            Self::Entry(_) => "entry",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Object(_) => "object",
            Self::Text(_) => "text",
            Self::Uint(_) => "unsigned int",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true when this value may be stored under `tag`.
    ///
    /// `Null` conforms to every tag. A record tag accepts an entry of that
    /// kind, or a raw object when the kind was not decoded structurally.
    #[must_use]
    pub fn conforms_to(&self, tag: &TypeTag) -> bool {
        match (tag, self) {
            (_, Self::Null)
            | (TypeTag::Primitive(Primitive::Bool), Self::Bool(_))
            | (TypeTag::Primitive(Primitive::Datetime), Self::Datetime(_))
            | (TypeTag::Primitive(Primitive::Float), Self::Float(_))
            | (TypeTag::Primitive(Primitive::Int), Self::Int(_))
            | (TypeTag::Primitive(Primitive::Object), Self::Object(_))
            | (TypeTag::Primitive(Primitive::String), Self::Text(_))
            | (TypeTag::Primitive(Primitive::UnsignedInt), Self::Uint(_))
            | (TypeTag::Record(_), Self::Object(_)) => true,
            (TypeTag::Record(name), Self::Entry(entry)) => entry.kind() == *name,
            (TypeTag::List(item), Self::List(items)) => items.iter().all(|v| v.conforms_to(item)),
            _ => false,
        }
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::Datetime(dt) => Some(dt),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Re-encode into the JSON shape the API sends.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        json::to_json(self)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_from_for_value {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    DateTime<FixedOffset> => Datetime,
    Entry => Entry,
    f64 => Float,
    i64 => Int,
    i32 => Int,
    u64 => Uint,
    u32 => Uint,
    String => Text,
    &str => Text,
    Vec<Value> => List,
    Map<String, JsonValue> => Object,
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
