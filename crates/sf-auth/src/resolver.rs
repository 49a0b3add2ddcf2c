//! Authentication strategy selection and execution.
//!
//! Selection is a pure function of the [`AuthConfig`]; only
//! [`AuthResolver::resolve`] touches the `sf` CLI or the network, and only for
//! the strategy that was selected.

use tracing::{info, instrument};

use crate::config::AuthConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::oauth::{OAuthClient, PasswordGrant, TokenExchange};
use crate::org_cli::{OrgSessionSource, SfCli};
use crate::session::{Session, DEFAULT_API_VERSION};

/// The authentication path chosen for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStrategy {
    /// `accessToken` is set: use it with `instanceUrl` as-is.
    AccessToken,
    /// Only `username` is set: ask the `sf` CLI for its cached session.
    CachedOrgSession { username: String },
    /// `username` and `password` are set: OAuth password grant.
    UsernamePassword,
    /// Nothing usable was supplied.
    Unresolved,
}

impl AuthStrategy {
    /// Pick the strategy for `auth`. The first matching rule wins.
    pub fn classify(auth: &AuthConfig) -> Self {
        if auth.access_token.is_some() {
            return Self::AccessToken;
        }
        match (&auth.username, &auth.password) {
            (Some(username), None) => Self::CachedOrgSession {
                username: username.clone(),
            },
            (Some(_), Some(_)) => Self::UsernamePassword,
            _ => Self::Unresolved,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccessToken => "access_token",
            Self::CachedOrgSession { .. } => "cached_org_session",
            Self::UsernamePassword => "username_password",
            Self::Unresolved => "unresolved",
        }
    }
}

impl std::fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Turns an [`AuthConfig`] into a [`Session`].
///
/// The `sf` CLI and the OAuth exchange are injectable so callers (and tests)
/// can substitute their own implementations.
pub struct AuthResolver {
    org_sessions: Box<dyn OrgSessionSource>,
    token_exchange: Box<dyn TokenExchange>,
}

impl std::fmt::Debug for AuthResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResolver").finish_non_exhaustive()
    }
}

impl Default for AuthResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResolver {
    /// Resolver backed by the `sf` CLI and a real OAuth client.
    pub fn new() -> Self {
        Self {
            org_sessions: Box::new(SfCli::new()),
            token_exchange: Box::new(OAuthClient::new()),
        }
    }

    /// Replace the cached-session lookup.
    pub fn with_org_session_source(mut self, source: impl OrgSessionSource + 'static) -> Self {
        self.org_sessions = Box::new(source);
        self
    }

    /// Replace the OAuth exchange.
    pub fn with_token_exchange(mut self, exchange: impl TokenExchange + 'static) -> Self {
        self.token_exchange = Box::new(exchange);
        self
    }

    /// Run the selected strategy. No other strategy is attempted on failure.
    #[instrument(skip(self, auth))]
    pub async fn resolve(&self, auth: &AuthConfig) -> Result<Session> {
        let strategy = AuthStrategy::classify(auth);
        info!(%strategy, "resolving Salesforce session");

        let session = match &strategy {
            AuthStrategy::AccessToken => from_access_token(auth)?,
            AuthStrategy::CachedOrgSession { username } => {
                let session = self.org_sessions.org_session(username)?;
                if !session.is_authenticated() {
                    return Err(Error::new(ErrorKind::SfdxCli(format!(
                        "no usable session for {}",
                        username
                    ))));
                }
                match auth.api_version.as_deref() {
                    Some(version) => session.with_api_version(version),
                    None => session,
                }
            }
            AuthStrategy::UsernamePassword => {
                let grant = PasswordGrant::from_config(auth)?;
                let token = self.token_exchange.password_grant(&grant).await?;
                let session = token.to_session(api_version(auth));
                if !session.is_authenticated() {
                    return Err(Error::new(ErrorKind::OAuth {
                        error: "incomplete_token_response".to_string(),
                        description: "token response lacks an access token or instance URL"
                            .to_string(),
                    }));
                }
                session
            }
            AuthStrategy::Unresolved => {
                return Err(Error::new(ErrorKind::NoValidConfiguration));
            }
        };

        info!(instance_url = %session.instance_url(), "session resolved");
        Ok(session)
    }
}

fn api_version(auth: &AuthConfig) -> &str {
    auth.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
}

fn from_access_token(auth: &AuthConfig) -> Result<Session> {
    let access_token = auth
        .access_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            Error::new(ErrorKind::InvalidCredentials(
                "accessToken is empty".to_string(),
            ))
        })?;
    let instance_url = auth
        .instance_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            Error::new(ErrorKind::InvalidCredentials(
                "instanceUrl is required when an accessToken is supplied".to_string(),
            ))
        })?;

    Ok(Session::new(instance_url, access_token).with_api_version(api_version(auth)))
}
