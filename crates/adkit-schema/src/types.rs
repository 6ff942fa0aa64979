use adkit_primitives::Primitive;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error as ThisError;

const LIST_PREFIX: &str = "list<";
const LIST_SUFFIX: &str = ">";

///
/// TypeTag
///
/// Declared semantic type of one field, in the generator's grammar:
/// a primitive, a record kind name, or `list<T>`.
///
/// Tags are plain `const` data so record descriptors can live in statics.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeTag {
    Primitive(Primitive),
    Record(&'static str),
    List(&'static Self),
}

impl TypeTag {
    pub const BOOL: Self = Self::Primitive(Primitive::Bool);
    pub const DATETIME: Self = Self::Primitive(Primitive::Datetime);
    pub const FLOAT: Self = Self::Primitive(Primitive::Float);
    pub const INT: Self = Self::Primitive(Primitive::Int);
    pub const OBJECT: Self = Self::Primitive(Primitive::Object);
    pub const STRING: Self = Self::Primitive(Primitive::String);
    pub const UNSIGNED_INT: Self = Self::Primitive(Primitive::UnsignedInt);

    /// Parse a tag string into an owned expression.
    pub fn parse(s: &str) -> Result<TypeExpr, TypeParseError> {
        TypeExpr::parse(s)
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    #[must_use]
    pub const fn primitive(&self) -> Option<Primitive> {
        match self {
            Self::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Element tag of a list, `None` for anything else.
    #[must_use]
    pub const fn item(&self) -> Option<&'static Self> {
        match self {
            Self::List(item) => Some(*item),
            _ => None,
        }
    }

    /// Tag left after unwrapping every `list<..>` layer.
    #[must_use]
    pub const fn innermost(&self) -> &Self {
        let mut tag = self;
        while let Self::List(item) = tag {
            tag = *item;
        }

        tag
    }

    /// Record kind this tag refers to, looking through lists.
    #[must_use]
    pub const fn referenced_record(&self) -> Option<&'static str> {
        match self.innermost() {
            Self::Record(name) => Some(*name),
            _ => None,
        }
    }

    /// Structural equality against a parsed expression.
    #[must_use]
    pub fn matches(&self, expr: &TypeExpr) -> bool {
        match (self, expr) {
            (Self::Primitive(a), TypeExpr::Primitive(b)) => a == b,
            (Self::Record(a), TypeExpr::Record(b)) => *a == b.as_str(),
            (Self::List(a), TypeExpr::List(b)) => a.matches(b),
            _ => false,
        }
    }

    #[must_use]
    pub fn to_expr(&self) -> TypeExpr {
        match self {
            Self::Primitive(p) => TypeExpr::Primitive(*p),
            Self::Record(name) => TypeExpr::Record((*name).to_string()),
            Self::List(item) => TypeExpr::List(Box::new(item.to_expr())),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Record(name) => f.write_str(name),
            Self::List(item) => write!(f, "{LIST_PREFIX}{item}{LIST_SUFFIX}"),
        }
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// TypeExpr
///
/// Owned form of a type tag, produced by parsing.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeExpr {
    Primitive(Primitive),
    Record(String),
    List(Box<Self>),
}

impl TypeExpr {
    pub fn parse(s: &str) -> Result<Self, TypeParseError> {
        if s.is_empty() {
            return Err(TypeParseError::Empty);
        }

        if let Some(rest) = s.strip_prefix(LIST_PREFIX) {
            let inner = rest
                .strip_suffix(LIST_SUFFIX)
                .ok_or_else(|| TypeParseError::UnterminatedList(s.to_string()))?;

            return Ok(Self::List(Box::new(Self::parse(inner)?)));
        }

        if let Some(primitive) = Primitive::from_wire_name(s) {
            return Ok(Self::Primitive(primitive));
        }

        if is_record_name(s) {
            Ok(Self::Record(s.to_string()))
        } else {
            Err(TypeParseError::InvalidRecordName(s.to_string()))
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Record(name) => f.write_str(name),
            Self::List(item) => write!(f, "{LIST_PREFIX}{item}{LIST_SUFFIX}"),
        }
    }
}

// record kind names are ascii UpperCamelCase
pub(crate) fn is_record_name(s: &str) -> bool {
    let mut chars = s.chars();

    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

///
/// TypeParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TypeParseError {
    #[error("type tag is empty")]
    Empty,

    #[error("list type tag '{0}' is missing its closing '>'")]
    UnterminatedList(String),

    #[error("'{0}' is neither a primitive nor a valid record kind name")]
    InvalidRecordName(String),
}
