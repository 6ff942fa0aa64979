#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::BTreeMap};

///
/// DecodeState
/// Ephemeral, in-memory decode counters for the current thread.
///

#[derive(Clone, Debug, Default)]
pub struct DecodeState {
    pub totals: DecodeTotals,
    pub records: BTreeMap<String, DecodeCounters>,
}

///
/// DecodeTotals
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DecodeTotals {
    pub entries_decoded: u64,
    pub fields_decoded: u64,
    pub unknown_fields_ignored: u64,
    pub decode_failures: u64,
    pub type_mismatches: u64,
}

///
/// DecodeCounters
/// Per-record-kind counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DecodeCounters {
    pub entries_decoded: u64,
    pub fields_decoded: u64,
    pub unknown_fields_ignored: u64,
    pub decode_failures: u64,
}

///
/// DecodeReport
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DecodeReport {
    pub totals: DecodeTotals,
    /// Per-record counters, busiest first.
    pub records: Vec<(String, DecodeCounters)>,
}

thread_local! {
    static DECODE_STATE: RefCell<DecodeState> = RefCell::new(DecodeState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&DecodeState) -> R) -> R {
    DECODE_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut DecodeState) -> R) -> R {
    DECODE_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub fn reset_all() {
    with_state_mut(|m| *m = DecodeState::default());
}

#[must_use]
pub fn report() -> DecodeReport {
    let snap = with_state(Clone::clone);

    let mut records: Vec<_> = snap.records.into_iter().collect();
    records.sort_by(|(a_name, a), (b_name, b)| {
        b.entries_decoded
            .cmp(&a.entries_decoded)
            .then_with(|| a_name.cmp(b_name))
    });

    DecodeReport {
        totals: snap.totals,
        records,
    }
}
