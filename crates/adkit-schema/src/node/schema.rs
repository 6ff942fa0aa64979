use crate::{build::SchemaBuilder, prelude::*};
use std::collections::{BTreeMap, BTreeSet};

///
/// Schema
///
/// Validated set of record kinds, keyed by ident. Only [`SchemaBuilder`]
/// constructs one, so every `Schema` value has passed validation.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    records: BTreeMap<&'static str, &'static Record>,
}

impl Schema {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub(crate) fn from_records(records: &[&'static Record]) -> Self {
        Self {
            records: records.iter().map(|r| (r.ident, *r)).collect(),
        }
    }

    pub fn get_record(&self, ident: &str) -> Result<&'static Record, NodeError> {
        self.records
            .get(ident)
            .copied()
            .ok_or_else(|| NodeError::UnknownRecord(ident.to_string()))
    }

    #[must_use]
    pub fn contains_record(&self, ident: &str) -> bool {
        self.records.contains_key(ident)
    }

    /// Registered record kinds in ident order.
    pub fn records(&self) -> impl Iterator<Item = &'static Record> + '_ {
        self.records.values().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record kinds named by field type tags but not registered here.
    /// These are external kinds; they are reported, not rejected.
    #[must_use]
    pub fn unresolved_references(&self) -> BTreeSet<&'static str> {
        self.records
            .values()
            .flat_map(|r| r.referenced_records())
            .filter(|name| !self.records.contains_key(name))
            .collect()
    }
}
