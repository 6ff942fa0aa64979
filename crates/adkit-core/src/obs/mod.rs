//! Observability: decode telemetry and the sink boundary.
//!
//! Decode logic never touches counters directly. All instrumentation flows
//! through [`DecodeEvent`] and [`DecodeSink`].

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{DecodeCounters, DecodeReport, DecodeTotals};
pub use sink::{DecodeEvent, DecodeSink, metrics_report, metrics_reset_all, with_sink};
