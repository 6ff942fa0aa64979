//! Generated ad-platform record kinds.
//!
//! Each module declares one record kind with its field table and the enum
//! groups documented alongside it. Referenced kinds that are not declared
//! here decode as raw objects.

pub mod ad_account_ad_rules_history;

use adkit_schema::node::{Record, RecordKind};

// re-exports
pub use ad_account_ad_rules_history::{
    Action, AdAccountAdRulesHistory, AdAccountAdRulesHistoryField, EvaluationType,
};

/// Every record kind declared in this crate.
pub const ALL_RECORDS: &[&Record] = &[AdAccountAdRulesHistory::RECORD];
