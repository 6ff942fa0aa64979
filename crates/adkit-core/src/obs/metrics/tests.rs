use crate::{
    error::ErrorClass,
    obs::{
        DecodeCounters, DecodeEvent, DecodeSink,
        metrics::{reset_all, with_state_mut},
        metrics_report,
        sink::{GLOBAL_DECODE_SINK, record},
        with_sink,
    },
};
use std::{cell::RefCell, rc::Rc};

#[derive(Default)]
struct CaptureSink {
    events: RefCell<Vec<DecodeEvent>>,
}

impl DecodeSink for CaptureSink {
    fn record(&self, event: DecodeEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn reset_all_clears_state() {
    with_state_mut(|m| {
        m.totals.entries_decoded = 3;
        m.records.insert("Alpha".to_string(), DecodeCounters::default());
    });

    reset_all();

    let report = metrics_report();
    assert_eq!(report.totals.entries_decoded, 0);
    assert!(report.records.is_empty());
}

#[test]
fn global_sink_accumulates_per_record() {
    reset_all();

    GLOBAL_DECODE_SINK.record(DecodeEvent::EntryDecoded {
        record: "Alpha",
        fields: 4,
    });
    GLOBAL_DECODE_SINK.record(DecodeEvent::EntryDecoded {
        record: "Beta",
        fields: 1,
    });
    GLOBAL_DECODE_SINK.record(DecodeEvent::EntryDecoded {
        record: "Beta",
        fields: 2,
    });
    GLOBAL_DECODE_SINK.record(DecodeEvent::UnknownFieldIgnored { record: "Alpha" });
    GLOBAL_DECODE_SINK.record(DecodeEvent::DecodeFailed {
        record: "Alpha",
        class: ErrorClass::TypeMismatch,
    });

    let report = metrics_report();
    assert_eq!(report.totals.entries_decoded, 3);
    assert_eq!(report.totals.fields_decoded, 7);
    assert_eq!(report.totals.unknown_fields_ignored, 1);
    assert_eq!(report.totals.decode_failures, 1);
    assert_eq!(report.totals.type_mismatches, 1);

    // busiest record first
    assert_eq!(report.records[0].0, "Beta");
    assert_eq!(report.records[0].1.entries_decoded, 2);
    assert_eq!(report.records[1].1.unknown_fields_ignored, 1);
}

#[test]
fn override_sink_captures_events_and_is_restored() {
    reset_all();
    let capture = Rc::new(CaptureSink::default());

    with_sink(capture.clone(), || {
        record(DecodeEvent::UnknownFieldIgnored { record: "Alpha" });
    });
    record(DecodeEvent::UnknownFieldIgnored { record: "Alpha" });

    assert_eq!(
        *capture.events.borrow(),
        vec![DecodeEvent::UnknownFieldIgnored { record: "Alpha" }]
    );
    assert_eq!(metrics_report().totals.unknown_fields_ignored, 1);
}
