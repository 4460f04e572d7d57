//! Transport primitives for the provider's token and resource calls.
//!
//! The module exposes [`HttpTransport`], the provider's only dependency on an HTTP stack, plus
//! the reqwest-backed [`ReqwestHttpClient`] used by default. Requests and responses are the
//! `http` crate types re-exported by [`oauth2`], so custom transports never see reqwest.

// std
#[cfg(feature = "reqwest")] use std::{ops::Deref, time::Duration as StdDuration};
// crates.io
use oauth2::{HttpClientError, HttpRequest, HttpResponse};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, NetworkError},
	oauth::Endpoint,
};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing the provider's requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared across
/// provider instances behind an `Arc`, and the returned futures must be `Send` so provider
/// calls can hop executors. A transport reports every HTTP response (including 4xx/5xx) as
/// `Ok`; status classification happens in the provider. Cancellation is dropping the future.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the full response.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;

	/// Converts a transport failure into a provider [`Error`].
	///
	/// The default treats transport-specific errors as network failures; override it to
	/// recognize timeouts or builder errors of a concrete client.
	fn map_transport_error(
		&self,
		endpoint: Endpoint,
		error: HttpClientError<Self::TransportError>,
	) -> Error {
		map_generic_transport_error(endpoint, error)
	}
}

pub(crate) fn map_generic_transport_error<E>(endpoint: Endpoint, error: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match error {
		HttpClientError::Reqwest(inner) => NetworkError::network(endpoint, *inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(source) => NetworkError::Io { endpoint, source }.into(),
		HttpClientError::Other(message) => NetworkError::Other { endpoint, message }.into(),
		_ => NetworkError::Other { endpoint, message: "unrecognized transport failure".into() }
			.into(),
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token endpoints answer directly instead of delegating to another URI, so clients built by
/// [`ReqwestHttpClient::with_timeout`] never follow redirects. Configure any custom
/// [`ReqwestClient`] passed to [`ReqwestHttpClient::with_client`] the same way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that aborts any request running longer than `timeout`.
	pub fn with_timeout(timeout: StdDuration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.timeout(timeout)
			.build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client
				.execute(request.try_into().map_err(Box::new)?)
				.await
				.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}

	fn map_transport_error(
		&self,
		endpoint: Endpoint,
		error: HttpClientError<Self::TransportError>,
	) -> Error {
		match error {
			HttpClientError::Reqwest(inner) if inner.is_builder() =>
				ConfigError::from(*inner).into(),
			HttpClientError::Reqwest(inner) if inner.is_timeout() =>
				NetworkError::timeout(endpoint, *inner).into(),
			other => map_generic_transport_error(endpoint, other),
		}
	}
}
