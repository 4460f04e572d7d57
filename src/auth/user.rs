//! Remote profile payloads and the normalized user handed back to the host.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, auth::AccessToken, error::ValidationError};

/// Raw JSON object returned by the resource endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteUserProfile(Map<String, Value>);
impl RemoteUserProfile {
	/// Wraps a decoded JSON object.
	pub fn new(body: Map<String, Value>) -> Self {
		Self(body)
	}

	/// Returns a raw field.
	pub fn get(&self, field: &str) -> Option<&Value> {
		self.0.get(field)
	}

	/// Returns the decoded object.
	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}
}
impl From<Map<String, Value>> for RemoteUserProfile {
	fn from(body: Map<String, Value>) -> Self {
		Self(body)
	}
}

/// Provider-neutral user record.
///
/// `id` is always present; every other field is optional and absent when the profile omits
/// it, sets it to `null`, or carries a value that is neither a string nor a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedUser {
	/// Remote account identifier (numbers are rendered in decimal).
	pub id: String,
	/// Display handle.
	pub nickname: Option<String>,
	/// E-mail address.
	pub email: Option<String>,
	/// Full name.
	pub name: Option<String>,
	/// Avatar image URL.
	pub avatar: Option<String>,
	/// Profile the record was mapped from.
	pub raw: RemoteUserProfile,
}
impl TryFrom<RemoteUserProfile> for NormalizedUser {
	type Error = ValidationError;

	fn try_from(profile: RemoteUserProfile) -> Result<Self, Self::Error> {
		let id = scalar(&profile, "id")
			.filter(|id| !id.is_empty())
			.ok_or(ValidationError::MissingUserId)?;

		Ok(Self {
			id,
			nickname: scalar(&profile, "nickname"),
			email: scalar(&profile, "email"),
			name: scalar(&profile, "name"),
			avatar: scalar(&profile, "avatar"),
			raw: profile,
		})
	}
}

/// Normalized user together with the token that was used to look it up.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
	/// The user record.
	pub user: NormalizedUser,
	/// Token obtained during the callback exchange.
	pub token: AccessToken,
}

fn scalar(profile: &RemoteUserProfile, field: &str) -> Option<String> {
	match profile.get(field)? {
		Value::String(value) => Some(value.clone()),
		Value::Number(value) => Some(value.to_string()),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn profile(value: Value) -> RemoteUserProfile {
		serde_json::from_value(value).expect("Profile fixture should be a JSON object.")
	}

	#[test]
	fn maps_present_fields_and_leaves_the_rest_absent() {
		let user = NormalizedUser::try_from(profile(json!({ "id": "42", "nickname": "bob" })))
			.expect("Profile with id should normalize.");

		assert_eq!(user.id, "42");
		assert_eq!(user.nickname.as_deref(), Some("bob"));
		assert_eq!(user.email, None);
		assert_eq!(user.name, None);
		assert_eq!(user.avatar, None);
		assert_eq!(user.raw.get("nickname"), Some(&json!("bob")));
	}

	#[test]
	fn numeric_ids_are_stringified() {
		let user = NormalizedUser::try_from(profile(json!({
			"id": 1024,
			"email": null,
			"avatar": { "large": "https://cdn.example.com/a.png" }
		})))
		.expect("Numeric id should normalize.");

		assert_eq!(user.id, "1024");
		assert_eq!(user.email, None);
		assert_eq!(user.avatar, None);
	}

	#[test]
	fn unusable_ids_fail_validation() {
		for body in [json!({ "nickname": "bob" }), json!({ "id": null }), json!({ "id": "" })] {
			assert_eq!(
				NormalizedUser::try_from(profile(body)),
				Err(ValidationError::MissingUserId)
			);
		}
	}
}
