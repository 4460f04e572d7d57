//! Endpoint options, their defaults, and the host configuration block.
//!
//! Options are typed: string keys from host configuration are parsed into [`OptionKey`] at the
//! boundary and never consulted again after construction.

// self
use crate::{_prelude::*, error::ConfigError};

/// Default endpoint base URL.
pub const DEFAULT_ENDPOINT: &str = "http://mul.axiong.me";
/// Default authorization path suffix.
pub const DEFAULT_AUTHORIZE_PATH: &str = "/oauth/authorize";
/// Default token path suffix.
pub const DEFAULT_TOKEN_PATH: &str = "/oauth/access_token";
/// Default resource (user profile) path suffix.
pub const DEFAULT_RESOURCE_PATH: &str = "/oapi/v1/resource";

/// Names of the overridable endpoint options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
	/// Endpoint base URL.
	Endpoint,
	/// Path appended to the base for the authorization redirect.
	AuthorizePath,
	/// Path appended to the base for token exchanges.
	TokenPath,
	/// Path appended to the base for the user profile.
	ResourcePath,
}
impl OptionKey {
	/// Every option, in declaration order.
	pub const ALL: [OptionKey; 4] =
		[OptionKey::Endpoint, OptionKey::AuthorizePath, OptionKey::TokenPath, OptionKey::ResourcePath];

	/// Returns the canonical snake_case name.
	pub const fn as_str(self) -> &'static str {
		match self {
			OptionKey::Endpoint => "endpoint",
			OptionKey::AuthorizePath => "authorize_path",
			OptionKey::TokenPath => "token_path",
			OptionKey::ResourcePath => "resource_path",
		}
	}

	/// Returns the documented default value.
	pub const fn default_value(self) -> &'static str {
		match self {
			OptionKey::Endpoint => DEFAULT_ENDPOINT,
			OptionKey::AuthorizePath => DEFAULT_AUTHORIZE_PATH,
			OptionKey::TokenPath => DEFAULT_TOKEN_PATH,
			OptionKey::ResourcePath => DEFAULT_RESOURCE_PATH,
		}
	}
}
impl Display for OptionKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for OptionKey {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"endpoint" => Ok(OptionKey::Endpoint),
			"authorize_path" | "authorizePath" | "postfixAuthorize" => Ok(OptionKey::AuthorizePath),
			"token_path" | "tokenPath" | "postfixAccessToken" => Ok(OptionKey::TokenPath),
			"resource_path" | "resourcePath" | "postfixResourceOwnerDetails" =>
				Ok(OptionKey::ResourcePath),
			other => Err(ConfigError::UnknownOption { key: other.to_owned() }),
		}
	}
}

/// Fully-populated endpoint options; every key always holds a non-empty value.
///
/// Fields are only reachable through [`ProviderOptions::get`] and [`ProviderOptions::set`]:
///
/// ```compile_fail
/// let mut options = oauth2_mulsite::provider::ProviderOptions::default();
///
/// options.token_path = String::new();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProviderOptions {
	pub(crate) endpoint: String,
	pub(crate) authorize_path: String,
	pub(crate) token_path: String,
	pub(crate) resource_path: String,
}
impl ProviderOptions {
	/// Returns the current value of `key`.
	pub fn get(&self, key: OptionKey) -> &str {
		match key {
			OptionKey::Endpoint => &self.endpoint,
			OptionKey::AuthorizePath => &self.authorize_path,
			OptionKey::TokenPath => &self.token_path,
			OptionKey::ResourcePath => &self.resource_path,
		}
	}

	/// Sets `key`; a blank value restores the default.
	pub fn set(&mut self, key: OptionKey, value: impl Into<String>) {
		let value = value.into();
		let value = if value.trim().is_empty() { key.default_value().to_owned() } else { value };
		let slot = match key {
			OptionKey::Endpoint => &mut self.endpoint,
			OptionKey::AuthorizePath => &mut self.authorize_path,
			OptionKey::TokenPath => &mut self.token_path,
			OptionKey::ResourcePath => &mut self.resource_path,
		};

		*slot = value;
	}

	/// Merges string-keyed overrides into the current options.
	///
	/// Keys that do not name an option are skipped, since host configuration blocks carry
	/// credentials next to the endpoint overrides.
	pub fn configure<I, K, V>(&mut self, overrides: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		for (key, value) in overrides {
			match key.as_ref().parse::<OptionKey>() {
				Ok(key) => self.set(key, value),
				Err(_) => {
					#[cfg(feature = "tracing")]
					tracing::debug!(key = key.as_ref(), "Ignoring unknown provider option.");
				},
			}
		}
	}

	/// Merges typed overrides into the current options.
	pub fn merge(&mut self, overrides: ProviderOverrides) {
		for key in OptionKey::ALL {
			if let Some(value) = overrides.get(key) {
				self.set(key, value.to_owned());
			}
		}
	}

	/// Joins the base with every path suffix and parses the results.
	pub fn endpoints(&self) -> Result<ProviderEndpoints, ConfigError> {
		Ok(ProviderEndpoints {
			authorization: self.join(OptionKey::AuthorizePath)?,
			token: self.join(OptionKey::TokenPath)?,
			resource: self.join(OptionKey::ResourcePath)?,
		})
	}

	fn join(&self, key: OptionKey) -> Result<Url, ConfigError> {
		let url = format!("{}{}", self.endpoint, self.get(key));

		Url::parse(&url).map_err(|source| ConfigError::InvalidEndpoint { key, url, source })
	}
}
impl Default for ProviderOptions {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.into(),
			authorize_path: DEFAULT_AUTHORIZE_PATH.into(),
			token_path: DEFAULT_TOKEN_PATH.into(),
			resource_path: DEFAULT_RESOURCE_PATH.into(),
		}
	}
}
impl From<ProviderOverrides> for ProviderOptions {
	fn from(overrides: ProviderOverrides) -> Self {
		let mut options = Self::default();

		options.merge(overrides);

		options
	}
}

/// Partial endpoint options as supplied by the host; unset fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderOverrides {
	/// Endpoint base URL override.
	pub endpoint: Option<String>,
	/// Authorization path override.
	#[serde(alias = "authorizePath", alias = "postfixAuthorize")]
	pub authorize_path: Option<String>,
	/// Token path override.
	#[serde(alias = "tokenPath", alias = "postfixAccessToken")]
	pub token_path: Option<String>,
	/// Resource path override.
	#[serde(alias = "resourcePath", alias = "postfixResourceOwnerDetails")]
	pub resource_path: Option<String>,
}
impl ProviderOverrides {
	/// Returns the override for `key`, if any.
	pub fn get(&self, key: OptionKey) -> Option<&str> {
		match key {
			OptionKey::Endpoint => self.endpoint.as_deref(),
			OptionKey::AuthorizePath => self.authorize_path.as_deref(),
			OptionKey::TokenPath => self.token_path.as_deref(),
			OptionKey::ResourcePath => self.resource_path.as_deref(),
		}
	}
}

/// Host configuration block carrying credentials next to the endpoint overrides.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
	/// OAuth 2.0 client identifier.
	pub client_id: Option<String>,
	/// OAuth 2.0 client secret.
	pub client_secret: Option<String>,
	/// Redirect URL registered with the provider.
	#[serde(alias = "redirect_url", alias = "redirect_uri")]
	pub redirect: Option<String>,
	/// Endpoint overrides.
	#[serde(flatten)]
	pub overrides: ProviderOverrides,
}
impl Debug for ProviderSettings {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderSettings")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect", &self.redirect)
			.field("overrides", &self.overrides)
			.finish()
	}
}

/// Parsed endpoint URLs derived from [`ProviderOptions`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Authorization redirect URL.
	pub authorization: Url,
	/// Token endpoint URL.
	pub token: Url,
	/// Resource (user profile) endpoint URL.
	pub resource: Url,
}
