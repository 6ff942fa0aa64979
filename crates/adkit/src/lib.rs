//! ## Crate layout
//! - `adobjects`: generated ad-platform record kinds.
//! - `core`: runtime values, entries, the payload decoder, and observability.
//! - `primitives`: the closed set of primitive type tags.
//! - `schema`: record descriptors, enum groups, and schema validation.
//!
//! [`schema()`] is the process-wide registry of every generated record kind,
//! validated once on first use.

pub use adkit_adobjects as adobjects;
pub use adkit_core as core;
pub use adkit_primitives as primitives;
pub use adkit_schema as schema;

mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};

use adkit_core::{config::DecodeConfig, decode::Decoder, entry::Entry};
use adkit_schema::node::Schema;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static SCHEMA: LazyLock<Result<Schema, Error>> = LazyLock::new(|| {
    Schema::builder()
        .records(adobjects::ALL_RECORDS.iter().copied())
        .build()
        .map_err(Error::from)
});

/// Process-wide schema holding every generated record kind.
///
/// Built and validated on first call; later calls read it without locking.
pub fn schema() -> Result<&'static Schema, Error> {
    SCHEMA.as_ref().map_err(Clone::clone)
}

/// Decoder over the process-wide schema.
pub fn decoder(config: DecodeConfig) -> Result<Decoder<'static>, Error> {
    Ok(Decoder::new(schema()?, config))
}

/// Decode one payload with the default configuration.
pub fn decode(kind: &str, payload: &JsonValue) -> Result<Entry, Error> {
    decoder(DecodeConfig::default())?
        .decode(kind, payload)
        .map_err(Error::from)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        adobjects::{
            Action, AdAccountAdRulesHistory, AdAccountAdRulesHistoryField, EvaluationType,
        },
        core::{
            config::{DecodeConfig, UnknownFieldPolicy},
            decode::{Decoder, encode},
            entry::Entry,
            traits::{ApiContext, FieldValues},
            value::Value,
        },
        schema::{
            node::{EnumGroup, Record, RecordKind as _, Schema},
            types::TypeTag,
        },
    };
}
