//! Redirect callback handling: state check, code exchange, and profile lookup in one call.

// self
use crate::{
	_prelude::*,
	auth::AuthenticatedUser,
	error::{ProtocolError, ValidationError},
	http::HttpTransport,
	obs::{self, FlowKind},
	provider::MulsiteProvider,
};

/// Query parameters the provider appends to the redirect URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackParams {
	/// Authorization code.
	pub code: Option<String>,
	/// State echoed back from the authorization URL.
	pub state: Option<String>,
	/// OAuth `error` when the user or provider refused the request.
	pub error: Option<String>,
	/// OAuth `error_description`.
	pub error_description: Option<String>,
}
impl CallbackParams {
	/// Extracts the callback parameters from the redirect URL; first occurrence wins.
	pub fn from_url(url: &Url) -> Self {
		let mut params = Self::default();

		for (key, value) in url.query_pairs() {
			let slot = match key.as_ref() {
				"code" => &mut params.code,
				"state" => &mut params.state,
				"error" => &mut params.error,
				"error_description" => &mut params.error_description,
				_ => continue,
			};

			if slot.is_none() {
				*slot = Some(value.into_owned());
			}
		}

		params
	}
}

impl<C> MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	/// Completes a login from the redirect callback.
	///
	/// The returned state must equal `expected_state` (the value issued with the authorization
	/// URL); an empty `expected_state` never matches. Provider-reported errors surface as
	/// [`ProtocolError::AuthorizationDenied`].
	pub async fn user_from_callback(
		&self,
		expected_state: &str,
		callback: CallbackParams,
	) -> Result<AuthenticatedUser> {
		obs::observe(FlowKind::Callback, "user_from_callback", async move {
			let CallbackParams { code, state, error, error_description } = callback;

			if expected_state.is_empty() || state.as_deref() != Some(expected_state) {
				return Err(ValidationError::StateMismatch.into());
			}
			if let Some(error) = error.filter(|error| !error.is_empty()) {
				return Err(
					ProtocolError::AuthorizationDenied { error, description: error_description }
						.into(),
				);
			}

			let code = code.filter(|code| !code.is_empty()).ok_or(ValidationError::MissingCode)?;
			let token = self.exchange_code(&code).await?;
			let user = self.user_from_token(token.access_token.expose()).await?;

			Ok(AuthenticatedUser { user, token })
		})
		.await
	}
}
