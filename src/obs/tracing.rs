// self
use crate::{
	_prelude::*,
	obs::{FlowKind, FlowOutcome},
};

/// Future produced by [`FlowSpan::instrument`]; the input future itself when tracing is off.
#[cfg(feature = "tracing")]
pub type Traced<F> = tracing::instrument::Instrumented<F>;
/// Future produced by [`FlowSpan::instrument`]; the input future itself when tracing is off.
#[cfg(not(feature = "tracing"))]
pub type Traced<F> = F;

/// Span covering one provider call.
///
/// The `outcome` field starts empty and is filled in by [`FlowSpan::record_outcome`] once the
/// call settles.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens a `mulsite_oauth.flow` span for `kind`, labeled with the calling operation.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self {
				span: tracing::info_span!(
					"mulsite_oauth.flow",
					provider = crate::provider::PROVIDER_NAME,
					flow = kind.as_str(),
					stage,
					outcome = tracing::field::Empty
				),
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Attaches the span to `fut`; nothing is held across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> Traced<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			tracing::Instrument::instrument(fut, self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Stores the final outcome on the span, logging the error of a failed call.
	pub fn record_outcome(&self, outcome: FlowOutcome, error: Option<&Error>) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());

			if let Some(error) = error {
				tracing::debug!(parent: &self.span, %error, "mulsite flow failed");
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (outcome, error);
		}
	}
}
