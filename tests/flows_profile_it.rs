#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use oauth2_mulsite::{
	_preludet::*,
	error::{ProtocolError, ValidationError},
	oauth::Endpoint,
	provider::OptionKey,
};

const RESOURCE_PATH: &str = "/oapi/v1/resource";

#[tokio::test]
async fn user_from_token_sends_the_bearer_token_and_normalizes() {
	let server = MockServer::start_async().await;
	let provider = build_reqwest_test_provider(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(RESOURCE_PATH)
				.header("accept", "application/json")
				.header("authorization", "Bearer abc123");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"42\",\"nickname\":\"bob\",\"level\":3}");
		})
		.await;
	let user = provider.user_from_token("abc123").await.expect("Profile lookup should succeed.");

	mock.assert_async().await;

	assert_eq!(user.id, "42");
	assert_eq!(user.nickname.as_deref(), Some("bob"));
	assert_eq!(user.email, None);
	assert_eq!(user.name, None);
	assert_eq!(user.avatar, None);
	assert_eq!(user.raw.get("level").and_then(|value| value.as_u64()), Some(3));
}

#[tokio::test]
async fn fetch_user_profile_honors_the_resource_path_override() {
	let server = MockServer::start_async().await;
	let provider = test_provider_builder(&server.base_url())
		.configure([("postfixResourceOwnerDetails", "/api/me")])
		.build()
		.expect("Provider with a custom resource path should build.");
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/me");
			then.status(200).body(
				"{\"id\":7,\"nickname\":\"amy\",\"email\":\"amy@example.com\",\"name\":\"Amy\",\
				 \"avatar\":\"https://cdn.example.com/amy.png\"}",
			);
		})
		.await;

	assert_eq!(provider.option(OptionKey::ResourcePath), "/api/me");

	let profile =
		provider.fetch_user_profile("abc123").await.expect("Profile lookup should succeed.");

	mock.assert_async().await;

	let user = provider.normalize_user(profile).expect("Profile with id should normalize.");

	assert_eq!(user.id, "7");
	assert_eq!(user.email.as_deref(), Some("amy@example.com"));
	assert_eq!(user.name.as_deref(), Some("Amy"));
	assert_eq!(user.avatar.as_deref(), Some("https://cdn.example.com/amy.png"));
}

#[tokio::test]
async fn profile_without_id_is_a_validation_error() {
	let server = MockServer::start_async().await;
	let provider = build_reqwest_test_provider(&server.base_url());

	server
		.mock_async(|when, then| {
			when.method(GET).path(RESOURCE_PATH);
			then.status(200).body("{\"nickname\":\"bob\"}");
		})
		.await;

	let err = provider.user_from_token("abc123").await.expect_err("Profiles need an id.");

	assert!(matches!(err, Error::Validation(ValidationError::MissingUserId)));

	// The raw lookup itself succeeds; only normalization rejects it.
	let profile =
		provider.fetch_user_profile("abc123").await.expect("Raw profile lookup should succeed.");

	assert_eq!(profile.get("nickname").and_then(|value| value.as_str()), Some("bob"));
}

#[tokio::test]
async fn non_json_profile_is_a_protocol_error() {
	let server = MockServer::start_async().await;
	let provider = build_reqwest_test_provider(&server.base_url());

	server
		.mock_async(|when, then| {
			when.method(GET).path(RESOURCE_PATH);
			then.status(200).header("content-type", "text/html").body("<html>login</html>");
		})
		.await;

	let err = provider.user_from_token("abc123").await.expect_err("HTML is not a profile.");

	assert!(matches!(
		err,
		Error::Protocol(ProtocolError::MalformedJson { endpoint: Endpoint::Resource, .. })
	));
}

#[tokio::test]
async fn rejected_token_is_a_protocol_error() {
	let server = MockServer::start_async().await;
	let provider = build_reqwest_test_provider(&server.base_url());

	server
		.mock_async(|when, then| {
			when.method(GET).path(RESOURCE_PATH);
			then.status(401).body("{\"error\":\"invalid_token\"}");
		})
		.await;

	let err = provider.user_from_token("expired").await.expect_err("HTTP 401 should fail.");

	assert!(matches!(
		err,
		Error::Protocol(ProtocolError::UnexpectedStatus {
			endpoint: Endpoint::Resource,
			status: 401,
			..
		})
	));
}
