mod r#enum;
mod field;
mod record;
mod schema;


pub use r#enum::*;
pub use field::*;
pub use record::*;
pub use schema::*;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// NodeError
///
/// Lookup failures against static descriptors. These are contract
/// violations by the caller and are never retried.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum NodeError {
    #[error("unknown enum group '{group}' on record '{record}'")]
    UnknownEnumGroup { record: &'static str, group: String },

    #[error("'{value}' is not a member of enum group '{group}'")]
    UnknownEnumValue { group: &'static str, value: String },

    #[error("unknown field '{field}' on record '{record}'")]
    UnknownField { record: &'static str, field: String },

    #[error("unknown record kind '{0}'")]
    UnknownRecord(String),
}

///
/// ValidateNode
///
/// Local structural checks for one node. Schema-wide checks live in
/// `crate::validate`.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// RecordKind
///
/// Binds a generated record type to its static descriptor.
///

pub trait RecordKind {
    const RECORD: &'static Record;
}
