//! Token endpoint exchanges for the authorization-code and refresh-token grants.
//!
//! Both grants share one wire contract: a form-encoded POST with `Accept: application/json`
//! carrying the client credentials, the redirect URI, the grant-specific credential, and
//! `grant_type`. The `_raw` variants hand back the decoded body untouched; the others also
//! require a usable `access_token`.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenResponse},
	http::HttpTransport,
	obs::{self, FlowKind},
	provider::{MulsiteProvider, grant::TokenGrant},
};

impl<C> MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	/// Exchanges an authorization code, returning the decoded token body.
	pub async fn exchange_code_raw(&self, code: &str) -> Result<TokenResponse> {
		obs::observe(
			FlowKind::CodeExchange,
			"exchange_code_raw",
			self.request_token(TokenGrant::AuthorizationCode(code)),
		)
		.await
	}

	/// Exchanges an authorization code for a validated access token.
	///
	/// Codes are single-use on the provider side; do not replay one after a failure.
	pub async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
		obs::observe(FlowKind::CodeExchange, "exchange_code", async move {
			let body = self.request_token(TokenGrant::AuthorizationCode(code)).await?;

			Ok(AccessToken::try_from(body)?)
		})
		.await
	}

	/// Exchanges a refresh token, returning the decoded token body.
	pub async fn exchange_refresh_token_raw(&self, refresh_token: &str) -> Result<TokenResponse> {
		obs::observe(
			FlowKind::RefreshExchange,
			"exchange_refresh_token_raw",
			self.request_token(TokenGrant::RefreshToken(refresh_token)),
		)
		.await
	}

	/// Exchanges a refresh token for a validated access token.
	pub async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<AccessToken> {
		obs::observe(FlowKind::RefreshExchange, "exchange_refresh_token", async move {
			let body = self.request_token(TokenGrant::RefreshToken(refresh_token)).await?;

			Ok(AccessToken::try_from(body)?)
		})
		.await
	}

	async fn request_token(&self, grant: TokenGrant<'_>) -> Result<TokenResponse> {
		let body = self.client.request_token(&self.endpoints.token, grant).await?;

		Ok(TokenResponse::new(body))
	}
}
