//! Token endpoint responses: the raw body and its validated view.

// std
use std::time::Duration as StdDuration;
// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, auth::TokenSecret, error::ProtocolError};

const SENSITIVE_FIELDS: [&str; 3] = ["access_token", "refresh_token", "id_token"];

/// Decoded token endpoint body; its shape is provider-defined.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenResponse(Map<String, Value>);
impl TokenResponse {
	/// Wraps a decoded JSON object.
	pub fn new(body: Map<String, Value>) -> Self {
		Self(body)
	}

	/// Returns a raw field.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.0.get(field)
	}

	/// Returns `access_token` when it is a string.
	pub fn access_token(&self) -> Option<&str> {
		self.0.get("access_token").and_then(Value::as_str)
	}

	/// Returns the decoded object.
	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	/// Consumes the response, returning the decoded object.
	pub fn into_map(self) -> Map<String, Value> {
		self.0
	}
}
impl From<Map<String, Value>> for TokenResponse {
	fn from(body: Map<String, Value>) -> Self {
		Self(body)
	}
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (key, value) in &self.0 {
			if SENSITIVE_FIELDS.contains(&key.as_str()) {
				map.entry(key, &"<redacted>");
			} else {
				map.entry(key, value);
			}
		}

		map.finish()
	}
}

/// Validated token response carrying a usable access token.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessToken {
	/// Bearer credential for the resource endpoint.
	pub access_token: TokenSecret,
	/// Credential for a later refresh-token exchange.
	pub refresh_token: Option<TokenSecret>,
	/// Token type reported by the provider (usually `Bearer`).
	pub token_type: Option<String>,
	/// Lifetime reported by the provider.
	pub expires_in: Option<Duration>,
	/// Scopes granted, verbatim.
	pub scope: Option<String>,
	/// The body this view was extracted from.
	pub raw: TokenResponse,
}
impl AccessToken {
	/// Computes the expiry instant relative to `issued_at`, when a lifetime was reported.
	pub fn expires_at(&self, issued_at: OffsetDateTime) -> Option<OffsetDateTime> {
		self.expires_in.and_then(|lifetime| issued_at.checked_add(lifetime))
	}
}
impl TryFrom<TokenResponse> for AccessToken {
	type Error = ProtocolError;

	/// Only `access_token` is required; other fields with an unusable shape read as absent and
	/// remain available through `raw`.
	fn try_from(raw: TokenResponse) -> Result<Self, Self::Error> {
		let access_token = raw
			.access_token()
			.filter(|token| !token.is_empty())
			.map(TokenSecret::new)
			.ok_or(ProtocolError::MissingAccessToken)?;
		let refresh_token = optional_string(&raw, "refresh_token")
			.filter(|token| !token.is_empty())
			.map(TokenSecret::new);
		let token_type = optional_string(&raw, "token_type");
		let scope = optional_string(&raw, "scope");
		let expires_in = optional_seconds(&raw, "expires_in");

		Ok(Self { access_token, refresh_token, token_type, expires_in, scope, raw })
	}
}

fn optional_string(raw: &TokenResponse, field: &str) -> Option<String> {
	raw.get(field).and_then(Value::as_str).map(str::to_owned)
}

fn optional_seconds(raw: &TokenResponse, field: &str) -> Option<Duration> {
	let seconds = match raw.get(field)? {
		Value::Number(value) => value.as_f64()?,
		Value::String(value) => value.trim().parse::<f64>().ok()?,
		_ => return None,
	};

	// Negative or non-finite lifetimes are dropped.
	let lifetime = StdDuration::try_from_secs_f64(seconds).ok()?;

	Duration::try_from(lifetime).ok()
}
