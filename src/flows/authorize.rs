//! Authorization redirect construction.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{_prelude::*, error::ValidationError, http::HttpTransport, provider::MulsiteProvider};

const STATE_LEN: usize = 40;

/// Authorization URL paired with the state it embeds.
///
/// Keep the value (e.g., in the user's session) until the redirect comes back, then compare
/// with [`AuthorizationRequest::validate_state`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// URL the user agent should be sent to.
	pub url: Url,
	/// Opaque CSRF token embedded as the `state` parameter.
	pub state: String,
}
impl AuthorizationRequest {
	/// Validates the `state` parameter returned by the redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if !self.state.is_empty() && returned_state == self.state {
			Ok(())
		} else {
			Err(ValidationError::StateMismatch.into())
		}
	}
}

impl<C> MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	/// Builds the authorization redirect URL for a caller-supplied `state`.
	///
	/// Pure: the same configuration and state always yield the same URL.
	pub fn authorization_url(&self, state: &str) -> Url {
		self.client.authorize_url(
			&self.endpoints.authorization,
			&self.formatted_scope(),
			state,
			&self.parameters,
		)
	}

	/// Generates a random state and builds the matching authorization URL.
	pub fn start_authorization(&self) -> AuthorizationRequest {
		let state = generate_state();

		AuthorizationRequest { url: self.authorization_url(&state), state }
	}
}

/// Generates a 40-character alphanumeric state token.
pub fn generate_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}
