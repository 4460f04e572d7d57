//! OAuth 2.0 client plumbing consumed by the provider.
//!
//! [`OAuth2Client`] owns the client credentials and the HTTP transport, and knows how to
//! build authorization URLs, form-encoded token requests, and bearer-authenticated resource
//! requests. Responses are decoded into JSON objects; anything else is a
//! [`ProtocolError`].

// crates.io
use oauth2::{
	HttpRequest, HttpResponse,
	http::{
		Method, Request,
		header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
	},
};
use serde_json::{Map, Value};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::{ConfigError, ProtocolError},
	http::HttpTransport,
	provider::grant::TokenGrant,
};

const JSON: &str = "application/json";
const FORM: &str = "application/x-www-form-urlencoded";
const BODY_PREVIEW_LIMIT: usize = 256;

/// Remote endpoint a request is addressed to; used to label errors and spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// Token endpoint (code and refresh exchanges).
	Token,
	/// Resource endpoint (user profile).
	Resource,
}
impl Endpoint {
	/// Returns a stable label for messages and fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Token => "token",
			Endpoint::Resource => "resource",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Client credentials plus transport shared by every provider call.
pub struct OAuth2Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: TokenSecret,
	/// Redirect URL exactly as configured; sent verbatim as `redirect_uri`.
	pub redirect_url: String,
	http_client: Arc<C>,
}
impl<C> OAuth2Client<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a client from already-validated credentials.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: TokenSecret,
		redirect_url: impl Into<String>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret,
			redirect_url: redirect_url.into(),
			http_client: http_client.into(),
		}
	}

	/// Returns the shared transport.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}

	/// Appends the authorization-code query parameters to `base`.
	///
	/// Caller-supplied `extra` pairs go last and may not shadow the standard parameters.
	pub(crate) fn authorize_url(
		&self,
		base: &Url,
		scope: &str,
		state: &str,
		extra: &[(String, String)],
	) -> Url {
		const RESERVED: [&str; 5] = ["client_id", "redirect_uri", "scope", "response_type", "state"];

		let mut url = base.clone();
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("client_id", &self.client_id);
		pairs.append_pair("redirect_uri", &self.redirect_url);
		pairs.append_pair("scope", scope);
		pairs.append_pair("response_type", "code");
		pairs.append_pair("state", state);

		for (key, value) in extra.iter().filter(|(key, _)| !RESERVED.contains(&key.as_str())) {
			pairs.append_pair(key, value);
		}

		drop(pairs);

		url
	}

	/// Builds the form body for a token request.
	pub(crate) fn token_form(&self, grant: TokenGrant<'_>) -> Vec<(&'static str, String)> {
		let grant_type = grant.grant_type();

		vec![
			("client_id", self.client_id.clone()),
			("client_secret", self.client_secret.expose().to_owned()),
			(grant_type.credential_field(), grant.credential().to_owned()),
			("redirect_uri", self.redirect_url.clone()),
			("grant_type", grant_type.as_str().to_owned()),
		]
	}

	/// POSTs a token request and decodes the JSON object it returns.
	pub(crate) async fn request_token(
		&self,
		token_url: &Url,
		grant: TokenGrant<'_>,
	) -> Result<Map<String, Value>> {
		let body = form_urlencoded::Serializer::new(String::new())
			.extend_pairs(self.token_form(grant))
			.finish();
		let request = Request::builder()
			.method(Method::POST)
			.uri(token_url.as_str())
			.header(ACCEPT, JSON)
			.header(CONTENT_TYPE, FORM)
			.body(body.into_bytes())
			.map_err(ConfigError::from)?;
		let response = self.dispatch(Endpoint::Token, request).await?;

		decode_object(Endpoint::Token, &response)
	}

	/// GETs the resource endpoint with a bearer token and decodes the JSON object it returns.
	pub(crate) async fn request_resource(
		&self,
		resource_url: &Url,
		access_token: &str,
	) -> Result<Map<String, Value>> {
		let request = Request::builder()
			.method(Method::GET)
			.uri(resource_url.as_str())
			.header(ACCEPT, JSON)
			.header(AUTHORIZATION, format!("Bearer {access_token}"))
			.body(Vec::new())
			.map_err(ConfigError::from)?;
		let response = self.dispatch(Endpoint::Resource, request).await?;

		decode_object(Endpoint::Resource, &response)
	}

	async fn dispatch(&self, endpoint: Endpoint, request: HttpRequest) -> Result<HttpResponse> {
		let transport = self.http_client.as_ref();
		let response = transport
			.execute(request)
			.await
			.map_err(|err| transport.map_transport_error(endpoint, err))?;
		let status = response.status();

		if !status.is_success() {
			return Err(ProtocolError::UnexpectedStatus {
				endpoint,
				status: status.as_u16(),
				body_preview: body_preview(response.body()),
			}
			.into());
		}

		Ok(response)
	}
}
impl<C> Clone for OAuth2Client<C>
where
	C: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			client_id: self.client_id.clone(),
			client_secret: self.client_secret.clone(),
			redirect_url: self.redirect_url.clone(),
			http_client: self.http_client.clone(),
		}
	}
}
impl<C> Debug for OAuth2Client<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth2Client")
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.field("redirect_url", &self.redirect_url)
			.finish()
	}
}

fn decode_object(endpoint: Endpoint, response: &HttpResponse) -> Result<Map<String, Value>> {
	let mut de = serde_json::Deserializer::from_slice(response.body());
	let object: Map<String, Value> = serde_path_to_error::deserialize(&mut de)
		.map_err(|source| ProtocolError::MalformedJson { endpoint, source })?;

	de.end().map_err(|source| ProtocolError::TrailingData { endpoint, source })?;

	Ok(object)
}

fn body_preview(body: &[u8]) -> String {
	let text = String::from_utf8_lossy(body);

	if text.chars().count() <= BODY_PREVIEW_LIMIT {
		return text.into_owned();
	}

	let mut buf = text.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}
