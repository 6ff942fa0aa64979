//! Static descriptors for API record kinds.
//!
//! A record kind is declared once as a `const` table (see [`record!`] and
//! [`enum_group!`]) and never mutated. Generic decoding and accessor code
//! reads these tables instead of reflecting over generated types.

pub mod build;
pub mod error;
pub mod macros;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for record kind identifiers.
pub const MAX_RECORD_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum length for enum member values.
pub const MAX_ENUM_VALUE_LEN: usize = 64;

///
/// re-exports
///
/// generated record kinds expand against these paths so the calling crate
/// does not need its own serde dependency
///

#[doc(hidden)]
pub mod __reexports {
    pub use serde;
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{TypeExpr, TypeTag},
    };
    pub use adkit_primitives::Primitive;
    pub use serde::Serialize;
}
