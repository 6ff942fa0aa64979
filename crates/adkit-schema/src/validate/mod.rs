//! Schema validation orchestration and shared helpers.

pub mod naming;
pub mod record;


use crate::{
    error::ErrorTree,
    node::{Record, ValidateNode},
};

/// Run full validation over a set of record descriptors in a staged,
/// deterministic order.
pub(crate) fn validate_records(records: &[&'static Record]) -> Result<(), ErrorTree> {
    // Phase 1: validate each record (structural + local invariants).
    let mut errors = validate_nodes(records);

    // Phase 2: enforce schema-wide invariants.
    validate_global(records, &mut errors);

    errors.result()
}

// Validate each record, nesting its errors under the record ident.
fn validate_nodes(records: &[&'static Record]) -> ErrorTree {
    let mut errors = ErrorTree::new();

    for record in records {
        errors.add_for(record.ident, record.validate().err().unwrap_or_default());
    }

    errors
}

// Run global validation passes that require the full record set.
fn validate_global(records: &[&'static Record], errors: &mut ErrorTree) {
    record::validate_unique_records(records, errors);
}
