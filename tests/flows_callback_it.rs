#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use oauth2_mulsite::{
	_preludet::*,
	error::{ProtocolError, ValidationError},
	flows::CallbackParams,
};

fn callback(query: &str) -> CallbackParams {
	let url = Url::parse(&format!("{TEST_REDIRECT_URL}?{query}"))
		.expect("Callback URL fixture should parse successfully.");

	CallbackParams::from_url(&url)
}

#[tokio::test]
async fn user_from_callback_exchanges_and_fetches() {
	let server = MockServer::start_async().await;
	let provider = build_reqwest_test_provider(&server.base_url());
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/access_token")
				.form_urlencoded_tuple("code", "code1")
				.form_urlencoded_tuple("grant_type", "authorization_code");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"abc123\",\"refresh_token\":\"refresh-1\"}");
		})
		.await;
	let profile_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/oapi/v1/resource").header("authorization", "Bearer abc123");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"42\",\"nickname\":\"bob\"}");
		})
		.await;
	let request = provider.start_authorization();
	let authenticated = provider
		.user_from_callback(&request.state, callback(&format!("code=code1&state={}", request.state)))
		.await
		.expect("Callback flow should succeed.");

	token_mock.assert_async().await;
	profile_mock.assert_async().await;

	assert_eq!(authenticated.user.id, "42");
	assert_eq!(authenticated.user.nickname.as_deref(), Some("bob"));
	assert_eq!(authenticated.token.access_token.expose(), "abc123");
	assert_eq!(
		authenticated.token.refresh_token.as_ref().map(|secret| secret.expose()),
		Some("refresh-1")
	);
}

#[tokio::test]
async fn state_mismatch_fails_before_any_request() {
	// Nothing listens here, so any request would surface as a network error.
	let provider = build_reqwest_test_provider("http://127.0.0.1:1");

	for (expected, query) in [
		("state-a", "code=code1&state=state-b"),
		("state-a", "code=code1"),
		("", "code=code1&state="),
		("state-a", "error=access_denied"),
	] {
		let err = provider
			.user_from_callback(expected, callback(query))
			.await
			.expect_err("Mismatched state should fail.");

		assert!(
			matches!(err, Error::Validation(ValidationError::StateMismatch)),
			"Unexpected error for {query:?}: {err:?}."
		);
	}
}

#[tokio::test]
async fn provider_error_is_reported_as_denied() {
	let provider = build_reqwest_test_provider("http://127.0.0.1:1");
	let err = provider
		.user_from_callback(
			"state-a",
			callback("error=access_denied&error_description=User+cancelled&state=state-a"),
		)
		.await
		.expect_err("Denied authorization should fail.");

	match err {
		Error::Protocol(ProtocolError::AuthorizationDenied { error, description }) => {
			assert_eq!(error, "access_denied");
			assert_eq!(description.as_deref(), Some("User cancelled"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn missing_code_is_a_validation_error() {
	let provider = build_reqwest_test_provider("http://127.0.0.1:1");

	for query in ["state=state-a", "state=state-a&code="] {
		let err = provider
			.user_from_callback("state-a", callback(query))
			.await
			.expect_err("Callbacks need a code.");

		assert!(matches!(err, Error::Validation(ValidationError::MissingCode)));
	}
}

#[tokio::test]
async fn empty_error_parameter_is_not_a_denial() {
	let provider = build_reqwest_test_provider("http://127.0.0.1:1");
	let err = provider
		.user_from_callback("state-a", callback("state=state-a&error=&error_description="))
		.await
		.expect_err("Callbacks need a code.");

	assert!(
		matches!(err, Error::Validation(ValidationError::MissingCode)),
		"Unexpected error: {err:?}."
	);
}
