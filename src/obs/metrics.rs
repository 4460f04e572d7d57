// std
use std::time::Duration as StdDuration;
// self
use crate::obs::{FlowKind, FlowOutcome};

/// Counter incremented once per attempt and once per settled call.
pub const FLOW_COUNTER: &str = "mulsite_oauth_flow_total";
/// Histogram of wall-clock seconds spent in each settled call.
pub const FLOW_DURATION_HISTOGRAM: &str = "mulsite_oauth_flow_duration_seconds";

/// Increments [`FLOW_COUNTER`] for `kind` + `outcome` on the global recorder.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(FLOW_COUNTER, "flow" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

/// Records how long a settled call took in [`FLOW_DURATION_HISTOGRAM`].
pub fn record_flow_duration(kind: FlowKind, outcome: FlowOutcome, elapsed: StdDuration) {
	#[cfg(feature = "metrics")]
	metrics::histogram!(
		FLOW_DURATION_HISTOGRAM,
		"flow" => kind.as_str(),
		"outcome" => outcome.as_str()
	)
	.record(elapsed.as_secs_f64());
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome, elapsed);
}
