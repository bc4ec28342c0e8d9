use super::CustomerSummary;
use crate::consts;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VaultUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub superuser: bool,
    pub admin: bool,
}

/// Discord identity linked during an OAuth2 sign-in
#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordAccount {
    pub id: String,
    /// 🔒 SENSITIVE: never logged, redacted from `Debug`
    pub access_token: Option<String>,
    pub scope: Option<String>,
}

impl fmt::Debug for DiscordAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordAccount")
            .field("id", &self.id)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| consts::REDACTED),
            )
            .field("scope", &self.scope)
            .finish()
    }
}

/// Payload of the `user.signin.oauth2` event
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OAuthSignIn {
    pub user: VaultUser,
    pub discord: DiscordAccount,
    pub customer: Option<CustomerSummary>,
}
