use crate::{config::ConfigError, decode::DecodeError};
use adkit_schema::node::NodeError;
use derive_more::Display;
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// The facade maps it onto its public error type.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Wrap a descriptor lookup failure raised at `origin`.
    #[must_use]
    pub fn node(origin: ErrorOrigin, err: NodeError) -> Self {
        let class = match err {
            NodeError::UnknownField { .. } => ErrorClass::UnknownField,
            NodeError::UnknownEnumGroup { .. } | NodeError::UnknownRecord(_) => {
                ErrorClass::NotFound
            }
            NodeError::UnknownEnumValue { .. } => ErrorClass::InvalidPayload,
        };

        Self {
            class,
            origin,
            message: err.to_string(),
            detail: Some(ErrorDetail::Node(err)),
        }
    }

    /// Construct an entry-origin type mismatch.
    pub(crate) fn entry_type_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::TypeMismatch, ErrorOrigin::Entry, message)
    }

    #[must_use]
    pub const fn is_unknown_field(&self) -> bool {
        matches!(self.class, ErrorClass::UnknownField)
    }
}

impl From<DecodeError> for InternalError {
    fn from(err: DecodeError) -> Self {
        let class = match err {
            DecodeError::TypeMismatch { .. } => ErrorClass::TypeMismatch,
            DecodeError::NestingTooDeep { .. } => ErrorClass::Unsupported,
            DecodeError::NotAnObject { .. }
            | DecodeError::InvalidDatetime { .. }
            | DecodeError::OutOfRange { .. } => ErrorClass::InvalidPayload,
        };

        Self {
            class,
            origin: ErrorOrigin::Decode,
            message: err.to_string(),
            detail: Some(ErrorDetail::Decode(err)),
        }
    }
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self {
            class: ErrorClass::InvalidPayload,
            origin: ErrorOrigin::Config,
            message: err.to_string(),
            detail: Some(ErrorDetail::Config(err)),
        }
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Node(NodeError),

    #[error("{0}")]
    Decode(DecodeError),

    #[error("{0}")]
    Config(ConfigError),
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidPayload,
    NotFound,
    TypeMismatch,
    UnknownField,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidPayload => "invalid_payload",
            Self::NotFound => "not_found",
            Self::TypeMismatch => "type_mismatch",
            Self::UnknownField => "unknown_field",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorOrigin {
    #[display("config")]
    Config,
    #[display("decode")]
    Decode,
    #[display("entry")]
    Entry,
    #[display("schema")]
    Schema,
}
