//! Builds a Mulsite provider from host settings, prints the login redirect, and checks the state
//! echoed back on a simulated callback.
//!
//! Set `MULSITE_ACCESS_TOKEN` to also fetch and print the profile behind a real token.

// std
use std::{collections::HashMap, env};
// crates.io
use color_eyre::Result;
// self
use oauth2_mulsite::{
	flows::CallbackParams,
	provider::{MulsiteProviderBuilder, OptionKey, ProviderSettings},
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let settings: ProviderSettings = serde_json::from_str(
		r#"{
			"client_id": "demo-client",
			"client_secret": "demo-secret",
			"redirect": "https://app.example.com/oauth/mulsite/callback",
			"postfixResourceOwnerDetails": "/oapi/v1/resource"
		}"#,
	)?;
	let provider = MulsiteProviderBuilder::from_settings(settings)
		.scopes(["user", "email"])
		.parameter("lang", "en")
		.build()?;
	let request = provider.start_authorization();

	println!("Endpoint: {}.", provider.option(OptionKey::Endpoint));
	println!("Send your user to {}.", request.url);

	let mut pending = HashMap::new();

	pending.insert(request.state.clone(), request);

	// Simulate the provider redirecting back with a code and the state we issued.
	let issued = pending.keys().next().cloned().unwrap_or_default();
	let redirect = Url::parse(&format!(
		"https://app.example.com/oauth/mulsite/callback?code=demo&state={issued}"
	))?;
	let callback = CallbackParams::from_url(&redirect);
	let returned_state = callback.state.clone().unwrap_or_default();

	match pending.remove(&returned_state) {
		Some(stashed) => {
			stashed.validate_state(&returned_state)?;
			println!("State matched; call user_from_callback to finish the login.");
		},
		None => eprintln!("State `{returned_state}` was not recognized."),
	}

	if let Ok(token) = env::var("MULSITE_ACCESS_TOKEN") {
		let user = provider.user_from_token(&token).await?;

		println!(
			"Signed in as {} ({}).",
			user.id,
			user.nickname.as_deref().unwrap_or("no nickname")
		);
	}

	Ok(())
}
