//! OAuth 2.0 username-password flow.
//!
//! The exchange sits behind the [`TokenExchange`] trait so the resolver can be
//! driven without a network in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::AuthConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::session::Session;
use crate::PRODUCTION_LOGIN_URL;

/// Inputs for the OAuth `password` grant.
///
/// `client_secret` and `password` are redacted in Debug output.
#[derive(Clone)]
pub struct PasswordGrant {
    /// Consumer key (client_id).
    pub client_id: String,
    client_secret: Option<String>,
    /// Login URL without trailing slash, e.g. `https://login.salesforce.com`.
    pub login_url: String,
    pub username: String,
    password: String,
}

impl std::fmt::Debug for PasswordGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordGrant")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("login_url", &self.login_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl PasswordGrant {
    /// Create a grant against the production login URL.
    pub fn new(
        client_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            login_url: PRODUCTION_LOGIN_URL.to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Set the consumer secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Set the login URL.
    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }

    /// Build a grant from merged auth settings.
    ///
    /// Fails without any I/O when a required value is missing or the host is
    /// not a usable URL.
    pub fn from_config(auth: &AuthConfig) -> Result<Self> {
        let username = auth.username.as_deref().ok_or_else(|| missing("username"))?;
        let password = auth.password.as_deref().ok_or_else(|| missing("password"))?;
        let client_id = auth
            .client_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| missing("clientId"))?;

        let mut grant = Self::new(client_id, username, password)
            .with_login_url(normalize_login_url(auth.o_auth_host.as_deref())?);
        if let Some(secret) = auth.client_secret.as_deref().filter(|s| !s.is_empty()) {
            grant = grant.with_secret(secret);
        }
        Ok(grant)
    }

    fn form_body(&self) -> Result<String> {
        let mut params = vec![
            ("grant_type", "password"),
            ("client_id", self.client_id.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ];

        if let Some(ref secret) = self.client_secret {
            params.push(("client_secret", secret.as_str()));
        }

        Ok(serde_urlencoded::to_string(params)?)
    }
}

fn missing(field: &str) -> Error {
    Error::new(ErrorKind::InvalidCredentials(format!(
        "{} is required for the username-password flow",
        field
    )))
}

/// Turn an `oAuthHost` value into a login URL.
///
/// Absent or blank hosts fall back to production; bare host names get `https://`.
pub fn normalize_login_url(host: Option<&str>) -> Result<String> {
    let host = match host.map(str::trim) {
        Some(h) if !h.is_empty() => h,
        _ => return Ok(PRODUCTION_LOGIN_URL.to_string()),
    };

    let candidate = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };

    let parsed = url::Url::parse(&candidate).map_err(|e| {
        Error::with_source(
            ErrorKind::InvalidCredentials(format!("oAuthHost is not a valid URL: {}", host)),
            e,
        )
    })?;

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Performs the OAuth token exchange.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    /// Exchange username and password for an access token.
    async fn password_grant(&self, grant: &PasswordGrant) -> Result<TokenResponse>;
}

/// OAuth client for authenticating with Salesforce.
#[derive(Debug, Clone, Default)]
pub struct OAuthClient {
    http_client: reqwest::Client,
}

impl OAuthClient {
    /// Create a new OAuth client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an OAuth client on top of an existing HTTP client.
    pub fn with_http_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    /// Handle a token response, checking for errors.
    async fn handle_token_response(&self, response: reqwest::Response) -> Result<TokenResponse> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let error = serde_json::from_str::<OAuthErrorResponse>(&body).unwrap_or_else(|_| {
                OAuthErrorResponse {
                    error: format!("http_{}", status.as_u16()),
                    error_description: status
                        .canonical_reason()
                        .unwrap_or("token request failed")
                        .to_string(),
                }
            });
            return Err(Error::new(ErrorKind::OAuth {
                error: error.error,
                description: error.error_description,
            }));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token)
    }
}

#[async_trait]
impl TokenExchange for OAuthClient {
    /// The password is not logged to prevent credential exposure.
    #[instrument(skip(self, grant), fields(login_url = %grant.login_url, username = %grant.username))]
    async fn password_grant(&self, grant: &PasswordGrant) -> Result<TokenResponse> {
        let body = grant.form_body()?;

        let response = self
            .http_client
            .post(format!("{}/services/oauth2/token", grant.login_url))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        self.handle_token_response(response).await
    }
}

/// Token response from OAuth.
///
/// `access_token` and `signature` are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Instance URL.
    pub instance_url: String,
    /// User ID URL.
    #[serde(default)]
    pub id: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Signature for verification.
    #[serde(default)]
    pub signature: Option<String>,
    /// Issued at timestamp.
    #[serde(default)]
    pub issued_at: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("instance_url", &self.instance_url)
            .field("id", &self.id)
            .field("token_type", &self.token_type)
            .field("signature", &self.signature.as_ref().map(|_| "[REDACTED]"))
            .field("issued_at", &self.issued_at)
            .finish()
    }
}

impl TokenResponse {
    /// Convert to a session for the given API version.
    pub fn to_session(&self, api_version: &str) -> Session {
        Session::new(&self.instance_url, &self.access_token).with_api_version(api_version)
    }
}

/// OAuth error response.
#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    #[serde(default)]
    error_description: String,
}
