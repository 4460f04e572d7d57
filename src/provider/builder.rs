//! Fluent construction of [`MulsiteProvider`] values with validation deferred to `build`.

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::ConfigError,
	http::HttpTransport,
	oauth::OAuth2Client,
	provider::{MulsiteProvider, OptionKey, ProviderOptions, ProviderOverrides, ProviderSettings},
};

/// Scope separator used when the caller does not pick one.
pub const DEFAULT_SCOPE_SEPARATOR: char = ',';

/// Builder for [`MulsiteProvider`] values; validation happens in `build`.
#[derive(Clone)]
pub struct MulsiteProviderBuilder {
	/// OAuth 2.0 client identifier.
	pub client_id: Option<String>,
	/// OAuth 2.0 client secret.
	pub client_secret: Option<TokenSecret>,
	/// Redirect URL registered with the provider.
	pub redirect_url: Option<String>,
	/// Endpoint options, pre-filled with defaults.
	pub options: ProviderOptions,
	/// Requested scopes, deduplicated in insertion order.
	pub scopes: Vec<String>,
	/// Character joining scopes in the `scope` parameter.
	pub scope_separator: char,
	/// Extra authorization query parameters.
	pub parameters: Vec<(String, String)>,
}
impl MulsiteProviderBuilder {
	/// Creates a builder with default options and no credentials.
	pub fn new() -> Self {
		Self {
			client_id: None,
			client_secret: None,
			redirect_url: None,
			options: ProviderOptions::default(),
			scopes: Vec::new(),
			scope_separator: DEFAULT_SCOPE_SEPARATOR,
			parameters: Vec::new(),
		}
	}

	/// Seeds a builder from a host configuration block.
	pub fn from_settings(settings: ProviderSettings) -> Self {
		let ProviderSettings { client_id, client_secret, redirect, overrides } = settings;

		Self {
			client_id,
			client_secret: client_secret.map(TokenSecret::new),
			redirect_url: redirect,
			..Self::new()
		}
		.overrides(overrides)
	}

	/// Sets the client identifier.
	pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the client secret.
	pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(TokenSecret::new(client_secret));

		self
	}

	/// Sets the redirect URL.
	pub fn redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
		self.redirect_url = Some(redirect_url.into());

		self
	}

	/// Overrides a single endpoint option.
	pub fn option(mut self, key: OptionKey, value: impl Into<String>) -> Self {
		self.options.set(key, value);

		self
	}

	/// Merges string-keyed endpoint overrides; an empty mapping changes nothing.
	pub fn configure<I, K, V>(mut self, overrides: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		self.options.configure(overrides);

		self
	}

	/// Merges typed endpoint overrides.
	pub fn overrides(mut self, overrides: ProviderOverrides) -> Self {
		self.options.merge(overrides);

		self
	}

	/// Adds scopes, skipping blanks and duplicates.
	pub fn scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for scope in scopes {
			let scope = scope.into();

			if !scope.trim().is_empty() && !self.scopes.contains(&scope) {
				self.scopes.push(scope);
			}
		}

		self
	}

	/// Overrides the scope separator.
	pub fn scope_separator(mut self, separator: char) -> Self {
		self.scope_separator = separator;

		self
	}

	/// Adds an extra authorization query parameter.
	pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.parameters.push((key.into(), value.into()));

		self
	}

	/// Validates the configuration and builds a provider on the supplied transport.
	pub fn build_with_http_client<C>(
		self,
		http_client: impl Into<Arc<C>>,
	) -> Result<MulsiteProvider<C>, ConfigError>
	where
		C: ?Sized + HttpTransport,
	{
		let client_id = self
			.client_id
			.filter(|value| !value.trim().is_empty())
			.ok_or(ConfigError::MissingClientId)?;
		let client_secret = self
			.client_secret
			.filter(|value| !value.is_blank())
			.ok_or(ConfigError::MissingClientSecret)?;
		let redirect = self
			.redirect_url
			.filter(|value| !value.trim().is_empty())
			.ok_or(ConfigError::MissingRedirectUrl)?;
		// Validated only; the configured string is sent verbatim as `redirect_uri`.
		Url::parse(&redirect)
			.map_err(|source| ConfigError::InvalidRedirect { url: redirect.clone(), source })?;

		let endpoints = self.options.endpoints()?;
		let client = OAuth2Client::new(client_id, client_secret, redirect, http_client);

		Ok(MulsiteProvider {
			options: self.options,
			endpoints,
			scopes: self.scopes,
			scope_separator: self.scope_separator,
			parameters: self.parameters,
			client,
		})
	}

	/// Validates the configuration and builds a provider on a default reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn build(self) -> Result<MulsiteProvider<ReqwestHttpClient>, ConfigError> {
		self.build_with_http_client(ReqwestHttpClient::default())
	}
}
impl Default for MulsiteProviderBuilder {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for MulsiteProviderBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MulsiteProviderBuilder")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect_url", &self.redirect_url)
			.field("options", &self.options)
			.field("scopes", &self.scopes)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[cfg(feature = "reqwest")]
	fn complete() -> MulsiteProviderBuilder {
		MulsiteProviderBuilder::new()
			.client_id("client")
			.client_secret("secret")
			.redirect_url("https://app.example.com/callback")
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn build_rejects_missing_credentials() {
		let err =
			MulsiteProviderBuilder::new().build().expect_err("Missing client id should fail.");

		assert!(matches!(err, ConfigError::MissingClientId));

		let err = MulsiteProviderBuilder::new()
			.client_id("client")
			.client_secret(" ")
			.build()
			.expect_err("Blank client secret should fail.");

		assert!(matches!(err, ConfigError::MissingClientSecret));

		let err = MulsiteProviderBuilder::new()
			.client_id("client")
			.client_secret("secret")
			.build()
			.expect_err("Missing redirect URL should fail.");

		assert!(matches!(err, ConfigError::MissingRedirectUrl));

		let err = complete()
			.redirect_url("/relative/callback")
			.build()
			.expect_err("Relative redirect URL should fail.");

		assert!(matches!(err, ConfigError::InvalidRedirect { .. }));
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn build_rejects_unparseable_endpoint() {
		let err = complete()
			.option(OptionKey::Endpoint, "mul axiong")
			.build()
			.expect_err("Invalid endpoint should fail.");

		assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
	}

	#[test]
	fn scopes_are_deduplicated_in_order() {
		let builder = MulsiteProviderBuilder::new().scopes(["user", "", "email"]).scopes(["user"]);

		assert_eq!(builder.scopes, ["user", "email"]);
	}

	#[test]
	fn debug_hides_client_secret() {
		let rendered =
			format!("{:?}", MulsiteProviderBuilder::new().client_secret("hunter2-secret"));

		assert!(!rendered.contains("hunter2-secret"));
		assert!(rendered.contains("client_secret_set: true"));
	}
}
