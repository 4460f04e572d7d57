#![cfg(feature = "reqwest")]

// std
use std::collections::HashMap;
// self
use oauth2_mulsite::{_preludet::*, provider::OptionKey};

fn query(url: &Url) -> Vec<(String, String)> {
	url.query_pairs().into_owned().collect()
}

#[test]
fn authorization_url_carries_the_standard_parameters() {
	let provider = build_reqwest_test_provider("http://mul.example.com");
	let url = provider.authorization_url("state-123");
	let pairs = query(&url);

	assert_eq!(url.path(), "/oauth/authorize");
	assert_eq!(
		pairs,
		[
			("client_id".to_owned(), TEST_CLIENT_ID.to_owned()),
			("redirect_uri".to_owned(), TEST_REDIRECT_URL.to_owned()),
			("scope".to_owned(), String::new()),
			("response_type".to_owned(), "code".to_owned()),
			("state".to_owned(), "state-123".to_owned()),
		]
	);
}

#[test]
fn changing_the_state_changes_only_the_state() {
	let provider = build_reqwest_test_provider("http://mul.example.com");
	let first = query(&provider.authorization_url("first"));
	let second = query(&provider.authorization_url("second"));

	assert_eq!(first.iter().filter(|(key, _)| key == "state").count(), 1);
	assert_eq!(second.iter().filter(|(key, _)| key == "state").count(), 1);

	for ((key_a, value_a), (key_b, value_b)) in first.iter().zip(second.iter()) {
		assert_eq!(key_a, key_b);

		if key_a == "state" {
			assert_eq!((value_a.as_str(), value_b.as_str()), ("first", "second"));
		} else {
			assert_eq!(value_a, value_b);
		}
	}
}

#[test]
fn authorization_url_follows_configured_path_scopes_and_parameters() {
	let provider = test_provider_builder("https://sso.example.com")
		.option(OptionKey::AuthorizePath, "/connect/authorize")
		.scopes(["user_info", "email"])
		.parameter("lang", "zh-CN")
		.parameter("state", "forged")
		.build()
		.expect("Provider with scopes should build.");
	let url = provider.authorization_url("csrf");
	let pairs: HashMap<_, _> = url.query_pairs().into_owned().collect();

	assert_eq!(url.host_str(), Some("sso.example.com"));
	assert_eq!(url.path(), "/connect/authorize");
	assert_eq!(pairs.get("scope").map(String::as_str), Some("user_info,email"));
	assert_eq!(pairs.get("lang").map(String::as_str), Some("zh-CN"));
	assert_eq!(pairs.get("state").map(String::as_str), Some("csrf"));
	assert_eq!(url.query_pairs().filter(|(key, _)| key == "state").count(), 1);
}

#[test]
fn custom_scope_separator_is_honored() {
	let provider = test_provider_builder("https://sso.example.com")
		.scopes(["a", "b"])
		.scope_separator(' ')
		.build()
		.expect("Provider with a custom separator should build.");

	assert_eq!(provider.formatted_scope(), "a b");
}

#[test]
fn start_authorization_embeds_its_state() {
	let provider = build_reqwest_test_provider("http://mul.example.com");
	let request = provider.start_authorization();
	let states = query(&request.url)
		.into_iter()
		.filter(|(key, _)| key == "state")
		.map(|(_, value)| value)
		.collect::<Vec<_>>();

	assert_eq!(states, [request.state.clone()]);
	assert_eq!(request.state.len(), 40);
	assert!(request.validate_state(&request.state).is_ok());
	assert!(request.validate_state("tampered").is_err());
	assert_ne!(request.state, provider.start_authorization().state);
}
