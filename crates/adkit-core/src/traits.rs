use crate::{error::InternalError, value::Value};
use std::fmt::Debug;

///
/// ApiContext
///
/// Back-reference from a decoded entry to the API client that fetched it.
/// Transport lives outside this crate; entries only carry the handle so
/// callers can resolve related objects through the same client.
///

pub trait ApiContext: Debug + Send + Sync {
    /// Graph API version the client talks to, e.g. `v21.0`.
    fn api_version(&self) -> &str;
}

///
/// FieldValues
///
/// Uniform "get field by name" access for generic code. Undeclared names
/// are errors, distinct from a declared field with no value.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Result<Option<Value>, InternalError>;
}
