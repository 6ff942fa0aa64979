use adkit_core::{
    config::ConfigError,
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
};
use adkit_schema::{build::BuildError, node::NodeError, types::TypeParseError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_unknown_field(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownField)
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::InvalidPayload => ErrorKind::InvalidPayload,
            ErrorClass::NotFound => ErrorKind::NotFound,
            ErrorClass::TypeMismatch => ErrorKind::TypeMismatch,
            ErrorClass::UnknownField => ErrorKind::UnknownField,
            ErrorClass::Unsupported => ErrorKind::Unsupported,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<NodeError> for Error {
    fn from(err: NodeError) -> Self {
        InternalError::node(CoreErrorOrigin::Schema, err).into()
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Self::new(ErrorKind::InvalidSchema, ErrorOrigin::Schema, err.to_string())
    }
}

impl From<TypeParseError> for Error {
    fn from(err: TypeParseError) -> Self {
        Self::new(ErrorKind::InvalidPayload, ErrorOrigin::Schema, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        InternalError::from(err).into()
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// A field name the record kind does not declare.
    UnknownField,

    /// A value that does not match the field's declared type.
    TypeMismatch,

    /// Malformed payload or configuration.
    InvalidPayload,

    /// Unknown record kind or enum group.
    NotFound,

    /// Well-formed input the decoder refuses (nesting too deep).
    Unsupported,

    /// Record descriptors failed validation.
    InvalidSchema,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Decode,
    Entry,
    Schema,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Config => Self::Config,
            CoreErrorOrigin::Decode => Self::Decode,
            CoreErrorOrigin::Entry => Self::Entry,
            CoreErrorOrigin::Schema => Self::Schema,
        }
    }
}
