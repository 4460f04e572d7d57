//! Optional observability helpers for provider flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `mulsite_oauth.flow` with the `flow` and
//!   `stage` (call site) fields; the `outcome` field is recorded when the call settles.
//! - Enable `metrics` to increment the `mulsite_oauth_flow_total` counter for every attempt and
//!   settled call, and to record call latency in `mulsite_oauth_flow_duration_seconds`. Both
//!   carry `flow` and `outcome` labels.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// std
use std::time::Instant;
// self
use crate::_prelude::*;

/// Provider flows observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Authorization code exchange at the token endpoint.
	CodeExchange,
	/// Refresh token exchange at the token endpoint.
	RefreshExchange,
	/// Profile lookup at the resource endpoint.
	UserProfile,
	/// Full callback handling (state check, exchange, profile).
	Callback,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::CodeExchange => "code_exchange",
			FlowKind::RefreshExchange => "refresh_exchange",
			FlowKind::UserProfile => "user_profile",
			FlowKind::Callback => "callback",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a provider operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a flow span, recording the attempt, the outcome, and the elapsed time.
pub(crate) async fn observe<T, Fut>(kind: FlowKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = FlowSpan::new(kind, stage);
	let started = Instant::now();

	record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = span.instrument(fut).await;
	let outcome = if result.is_ok() { FlowOutcome::Success } else { FlowOutcome::Failure };

	span.record_outcome(outcome, result.as_ref().err());
	record_flow_outcome(kind, outcome);
	record_flow_duration(kind, outcome, started.elapsed());

	result
}
