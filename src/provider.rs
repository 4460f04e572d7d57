//! The Mulsite provider: configuration (data) plus the OAuth client it drives.
//!
//! `options` holds the endpoint base and path suffixes with their defaults, `builder`
//! validates credentials and options into a [`MulsiteProvider`], and `grant` names the two
//! grants the token endpoint understands. The flows themselves live in [`crate::flows`].

pub mod builder;
pub mod grant;
pub mod options;

pub use builder::*;
pub use grant::*;
pub use options::*;

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{_prelude::*, http::HttpTransport, oauth::OAuth2Client};

/// Name under which hosts register this provider.
pub const PROVIDER_NAME: &str = "mulsite";

#[cfg(feature = "reqwest")]
/// Provider specialized for the crate's default reqwest transport.
pub type ReqwestMulsiteProvider = MulsiteProvider<ReqwestHttpClient>;

/// OAuth 2.0 client for the Mulsite identity endpoint.
///
/// Configuration is fixed once `build` returns; every operation takes `&self`, so a provider
/// can be shared freely. Instances hold no per-request state and share nothing except the
/// `Arc`-wrapped transport they were built with.
pub struct MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	pub(crate) options: ProviderOptions,
	pub(crate) endpoints: ProviderEndpoints,
	pub(crate) scopes: Vec<String>,
	pub(crate) scope_separator: char,
	pub(crate) parameters: Vec<(String, String)>,
	pub(crate) client: OAuth2Client<C>,
}
#[cfg(feature = "reqwest")]
impl MulsiteProvider<ReqwestHttpClient> {
	/// Starts a new builder with default options.
	///
	/// Finish with [`MulsiteProviderBuilder::build`] for the default transport, or with
	/// [`MulsiteProviderBuilder::build_with_http_client`] for a custom one.
	pub fn builder() -> MulsiteProviderBuilder {
		MulsiteProviderBuilder::new()
	}
}
impl<C> MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	/// Returns the value of an endpoint option (the default when it was never set).
	pub fn option(&self, key: OptionKey) -> &str {
		self.options.get(key)
	}

	/// Returns all endpoint options.
	pub fn options(&self) -> &ProviderOptions {
		&self.options
	}

	/// Returns the parsed endpoint URLs.
	pub fn endpoints(&self) -> &ProviderEndpoints {
		&self.endpoints
	}

	/// Returns the requested scopes.
	pub fn scopes(&self) -> &[String] {
		&self.scopes
	}

	/// Returns the OAuth client helper (credentials + transport).
	pub fn client(&self) -> &OAuth2Client<C> {
		&self.client
	}

	/// Joins the requested scopes with the configured separator.
	pub fn formatted_scope(&self) -> String {
		let mut buf = String::new();

		for (idx, scope) in self.scopes.iter().enumerate() {
			if idx > 0 {
				buf.push(self.scope_separator);
			}

			buf.push_str(scope);
		}

		buf
	}
}
impl<C> Clone for MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			options: self.options.clone(),
			endpoints: self.endpoints.clone(),
			scopes: self.scopes.clone(),
			scope_separator: self.scope_separator,
			parameters: self.parameters.clone(),
			client: self.client.clone(),
		}
	}
}
impl<C> Debug for MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MulsiteProvider")
			.field("options", &self.options)
			.field("scopes", &self.scopes)
			.field("client", &self.client)
			.finish()
	}
}
