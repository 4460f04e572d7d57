//! Resource endpoint lookups and profile normalization.

// self
use crate::{
	_prelude::*,
	auth::{NormalizedUser, RemoteUserProfile},
	http::HttpTransport,
	obs::{self, FlowKind},
	provider::MulsiteProvider,
};

impl<C> MulsiteProvider<C>
where
	C: ?Sized + HttpTransport,
{
	/// Fetches the raw profile owned by `access_token`.
	pub async fn fetch_user_profile(&self, access_token: &str) -> Result<RemoteUserProfile> {
		obs::observe(FlowKind::UserProfile, "fetch_user_profile", async move {
			let body = self.client.request_resource(&self.endpoints.resource, access_token).await?;

			Ok(RemoteUserProfile::new(body))
		})
		.await
	}

	/// Maps a raw profile onto a [`NormalizedUser`]; fails when `id` is missing.
	pub fn normalize_user(&self, profile: RemoteUserProfile) -> Result<NormalizedUser> {
		Ok(NormalizedUser::try_from(profile)?)
	}

	/// Fetches and normalizes the profile owned by `access_token`.
	pub async fn user_from_token(&self, access_token: &str) -> Result<NormalizedUser> {
		let profile = self.fetch_user_profile(access_token).await?;

		self.normalize_user(profile)
	}
}
