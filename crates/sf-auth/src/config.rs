//! Partially-populated authentication settings.

use serde::Deserialize;

/// Authentication settings merged from the config file, environment and CLI.
///
/// Every field is optional; which ones are present decides the
/// [`AuthStrategy`](crate::AuthStrategy). Secrets are redacted in Debug output.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    /// Login host for the password grant (e.g. `https://test.salesforce.com`).
    pub o_auth_host: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
    pub instance_url: Option<String>,
    /// REST API version used for describe calls (e.g. "62.0").
    pub api_version: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("o_auth_host", &self.o_auth_host)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("instance_url", &self.instance_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}
