//! Metrics sink boundary.
//!
//! This module is the only bridge between decode logic and the
//! thread-local metrics state.

use crate::{error::ErrorClass, obs::metrics};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn DecodeSink>>> = RefCell::new(None);
}

///
/// DecodeEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeEvent {
    EntryDecoded {
        record: &'static str,
        fields: u64,
    },
    UnknownFieldIgnored {
        record: &'static str,
    },
    DecodeFailed {
        record: &'static str,
        class: ErrorClass,
    },
}

///
/// DecodeSink
///

pub trait DecodeSink {
    fn record(&self, event: DecodeEvent);
}

/// GlobalDecodeSink
/// Default sink that writes into the thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalDecodeSink;

impl DecodeSink for GlobalDecodeSink {
    fn record(&self, event: DecodeEvent) {
        match event {
            DecodeEvent::EntryDecoded { record, fields } => {
                metrics::with_state_mut(|m| {
                    m.totals.entries_decoded = m.totals.entries_decoded.saturating_add(1);
                    m.totals.fields_decoded = m.totals.fields_decoded.saturating_add(fields);

                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.entries_decoded = entry.entries_decoded.saturating_add(1);
                    entry.fields_decoded = entry.fields_decoded.saturating_add(fields);
                });
            }

            DecodeEvent::UnknownFieldIgnored { record } => {
                metrics::with_state_mut(|m| {
                    m.totals.unknown_fields_ignored =
                        m.totals.unknown_fields_ignored.saturating_add(1);

                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.unknown_fields_ignored = entry.unknown_fields_ignored.saturating_add(1);
                });
            }

            DecodeEvent::DecodeFailed { record, class } => {
                metrics::with_state_mut(|m| {
                    m.totals.decode_failures = m.totals.decode_failures.saturating_add(1);
                    if class == ErrorClass::TypeMismatch {
                        m.totals.type_mismatches = m.totals.type_mismatches.saturating_add(1);
                    }

                    let entry = m.records.entry(record.to_string()).or_default();
                    entry.decode_failures = entry.decode_failures.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_DECODE_SINK: GlobalDecodeSink = GlobalDecodeSink;

pub(crate) fn record(event: DecodeEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match override_sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_DECODE_SINK.record(event),
    }
}

/// Snapshot the current thread's decode metrics.
#[must_use]
pub fn metrics_report() -> metrics::DecodeReport {
    metrics::report()
}

/// Reset the current thread's decode metrics.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary sink override on this thread.
/// The previous sink is restored on every exit, including unwinding.
pub fn with_sink<T>(sink: Rc<dyn DecodeSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn DecodeSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
