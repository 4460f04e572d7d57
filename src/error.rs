//! Provider-level error types shared across configuration, transport, and flows.

// self
use crate::{_prelude::*, oauth::Endpoint, provider::OptionKey};

/// Provider-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical provider error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Network(#[from] NetworkError),
	/// Remote endpoint answered with something other than the agreed wire contract.
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
	/// Decoded data or callback parameters failed validation.
	#[error(transparent)]
	Validation(#[from] ValidationError),
}

/// Configuration failures raised while constructing a provider or a request.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Client identifier is missing or blank.
	#[error("Client identifier is missing.")]
	MissingClientId,
	/// Client secret is missing or blank.
	#[error("Client secret is missing.")]
	MissingClientSecret,
	/// Redirect URL is missing or blank.
	#[error("Redirect URL is missing.")]
	MissingRedirectUrl,
	/// Redirect URL cannot be parsed.
	#[error("Redirect URL `{url}` is invalid.")]
	InvalidRedirect {
		/// Raw value that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint base joined with a path suffix does not form a valid URL.
	#[error("The {key} option yields an invalid URL `{url}`.")]
	InvalidEndpoint {
		/// Option whose value produced the invalid URL.
		key: OptionKey,
		/// Joined URL that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// String key does not name a provider option.
	#[error("Unknown provider option `{key}`.")]
	UnknownOption {
		/// Offending key.
		key: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum NetworkError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {endpoint} endpoint.")]
	Network {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request did not complete before the transport's deadline.
	#[error("Request to the {endpoint} endpoint timed out.")]
	Timeout {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the {endpoint} endpoint.")]
	Io {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Transport failed without a structured error.
	#[error("HTTP client error occurred while calling the {endpoint} endpoint: {message}.")]
	Other {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Transport-supplied message.
		message: String,
	},
}
impl NetworkError {
	/// Wraps a transport-specific network error.
	pub fn network(endpoint: Endpoint, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout.
	pub fn timeout(endpoint: Endpoint, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { endpoint, source: Box::new(src) }
	}
}

/// Wire-contract violations reported by the remote endpoints.
#[derive(Debug, ThisError)]
pub enum ProtocolError {
	/// Endpoint answered with a non-2xx status.
	#[error("The {endpoint} endpoint returned HTTP {status}.")]
	UnexpectedStatus {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// HTTP status code.
		status: u16,
		/// Truncated response body for diagnostics.
		body_preview: String,
	},
	/// Response body is not a JSON object.
	#[error("The {endpoint} endpoint returned malformed JSON.")]
	MalformedJson {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Response body carries data after the JSON object.
	#[error("The {endpoint} endpoint returned trailing data after the JSON object.")]
	TrailingData {
		/// Endpoint being called.
		endpoint: Endpoint,
		/// Parser failure at the trailing data.
		#[source]
		source: serde_json::Error,
	},
	/// Token response lacks a usable `access_token`.
	#[error("Token response is missing access_token.")]
	MissingAccessToken,
	/// Authorization redirect carried an OAuth `error` instead of a code.
	#[error("Authorization was denied: {error}.")]
	AuthorizationDenied {
		/// OAuth `error` value.
		error: String,
		/// OAuth `error_description`, when supplied.
		description: Option<String>,
	},
}

/// Validation failures on decoded data and callback parameters.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Remote profile has no usable `id`.
	#[error("User profile is missing the id field.")]
	MissingUserId,
	/// Callback `state` does not match the value issued with the authorization URL.
	#[error("Authorization state mismatch.")]
	StateMismatch,
	/// Callback did not carry an authorization code.
	#[error("Authorization callback is missing the code parameter.")]
	MissingCode,
}
