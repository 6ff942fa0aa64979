//! Runtime side of record kinds: values, record instances, and the
//! descriptor-driven payload decoder.
//!
//! Schema code (`adkit-schema`) defines *what fields exist*; this crate
//! defines *what a decoded entry holds*.

pub mod config;
pub mod decode;
pub mod entry;
pub mod error;
pub mod obs;
pub mod traits;
pub mod value;

#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::{DecodeConfig, UnknownFieldPolicy},
        decode::{Decoder, encode},
        entry::Entry,
        error::InternalError,
        traits::{ApiContext, FieldValues},
        value::Value,
    };
    pub use adkit_schema::{
        node::{Record, RecordKind, Schema},
        types::TypeTag,
    };
}
