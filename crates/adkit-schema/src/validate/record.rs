use crate::{err, error::ErrorTree, node::Record};
use std::collections::BTreeSet;

/// Record kinds are addressed by ident, so each ident may be registered once.
pub fn validate_unique_records(records: &[&'static Record], errs: &mut ErrorTree) {
    let mut seen = BTreeSet::new();

    for record in records {
        if !seen.insert(record.ident) {
            err!(errs, "duplicate record kind '{}'", record.ident);
        }
    }
}
