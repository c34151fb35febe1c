//! The minimal identity surface the client needs.
//!
//! Sign-in itself happens with a hosted identity provider, the client only
//! ever sees the record the provider hands back after login. That record is
//! reduced to [UserProfile] here so the rest of the client depends on two
//! fields instead of a provider-specific object.

use serde::Deserialize;

/// The account record returned by the identity provider after login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAccount {
    /// The provider-assigned stable user ID.
    pub uid: String,
    /// The user's display name, when the provider has one.
    pub display_name: Option<String>,
    /// The user's email address.
    pub email: Option<String>,
}

/// What the client knows about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// The opaque ID used as the partition key for all transaction calls.
    pub id: String,
    /// A human-readable name for the header, the display name when present,
    /// otherwise the email, otherwise the raw ID.
    pub display_name: String,
}

impl From<ProviderAccount> for UserProfile {
    fn from(account: ProviderAccount) -> Self {
        let display_name = account
            .display_name
            .or(account.email)
            .unwrap_or_else(|| account.uid.clone());

        Self {
            id: account.uid,
            display_name,
        }
    }
}
