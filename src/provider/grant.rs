//! Token endpoint grants.

// self
use crate::_prelude::*;

/// Grants the Mulsite token endpoint accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Exchange of a one-time authorization code.
	AuthorizationCode,
	/// Exchange of a previously issued refresh token.
	RefreshToken,
}
impl GrantType {
	/// Value of the `grant_type` form field.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
		}
	}

	/// Form field carrying the grant's credential.
	pub const fn credential_field(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "code",
			GrantType::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A grant together with the credential it redeems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenGrant<'a> {
	AuthorizationCode(&'a str),
	RefreshToken(&'a str),
}
impl<'a> TokenGrant<'a> {
	pub(crate) fn grant_type(self) -> GrantType {
		match self {
			TokenGrant::AuthorizationCode(_) => GrantType::AuthorizationCode,
			TokenGrant::RefreshToken(_) => GrantType::RefreshToken,
		}
	}

	pub(crate) fn credential(self) -> &'a str {
		match self {
			TokenGrant::AuthorizationCode(value) | TokenGrant::RefreshToken(value) => value,
		}
	}
}
