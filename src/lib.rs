//! Mulsite social login over OAuth 2.0: build the authorization redirect, exchange codes and
//! refresh tokens, and map the remote profile onto a normalized user.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod provider;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::provider::{MulsiteProviderBuilder, OptionKey, ReqwestMulsiteProvider};

	/// Client identifier used by test providers.
	pub const TEST_CLIENT_ID: &str = "client-it";
	/// Client secret used by test providers.
	pub const TEST_CLIENT_SECRET: &str = "secret-it";
	/// Redirect URL used by test providers.
	pub const TEST_REDIRECT_URL: &str = "https://app.example.com/oauth/mulsite/callback";

	/// Builder pre-filled with test credentials and pointed at `endpoint` (e.g., a mock server).
	pub fn test_provider_builder(endpoint: &str) -> MulsiteProviderBuilder {
		MulsiteProviderBuilder::new()
			.client_id(TEST_CLIENT_ID)
			.client_secret(TEST_CLIENT_SECRET)
			.redirect_url(TEST_REDIRECT_URL)
			.option(OptionKey::Endpoint, endpoint)
	}

	/// Constructs a reqwest-backed provider pointed at `endpoint`.
	pub fn build_reqwest_test_provider(endpoint: &str) -> ReqwestMulsiteProvider {
		test_provider_builder(endpoint).build().expect("Failed to build Mulsite test provider.")
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
