use crate::{error::ErrorTree, node::{Record, Schema}, validate::validate_records};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// SchemaBuilder
///
/// Collects record descriptors and validates them as a whole. Registration
/// order does not matter; duplicates are reported rather than overwritten.
///

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    records: Vec<&'static Record>,
}

impl SchemaBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn record(mut self, record: &'static Record) -> Self {
        self.records.push(record);
        self
    }

    #[must_use]
    pub fn records(mut self, records: impl IntoIterator<Item = &'static Record>) -> Self {
        self.records.extend(records);
        self
    }

    /// Validate every registered record and build the schema.
    pub fn build(self) -> Result<Schema, BuildError> {
        validate_records(&self.records).map_err(BuildError::Validation)?;

        Ok(Schema::from_records(&self.records))
    }
}
