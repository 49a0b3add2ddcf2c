//! The authenticated session threaded through a generation run.
//!
//! Session implements custom Debug to redact the bearer token.

/// Default REST API version when neither the config nor the CLI names one.
pub const DEFAULT_API_VERSION: &str = "62.0";

/// Authenticated Salesforce session (bearer token + instance URL).
///
/// Created once by the [`AuthResolver`](crate::AuthResolver) and handed to
/// whatever needs to talk to the org. It is never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Session {
    /// Create a session for the default API version.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Change the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the Salesforce instance URL (no trailing slash).
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the bearer token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version (e.g., "62.0").
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns true if the session carries both a token and an instance URL.
    pub fn is_authenticated(&self) -> bool {
        !self.instance_url.is_empty() && !self.access_token.is_empty()
    }

    /// Get the base REST API URL for this org.
    pub fn rest_api_url(&self) -> String {
        format!("{}/services/data/v{}", self.instance_url, self.api_version)
    }
}
