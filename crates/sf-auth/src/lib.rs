//! # sf-auth
//!
//! Resolves one authenticated Salesforce [`Session`] from partial settings.
//!
//! ## Security
//!
//! - Sensitive data (tokens, secrets, passwords) are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Strategies
//!
//! Evaluated in order, first match wins:
//!
//! - **Access token** - `accessToken` (+ `instanceUrl`) used directly
//! - **Cached org session** - `username` only, session read from the `sf` CLI
//! - **Username/password** - OAuth 2.0 password grant against `oAuthHost`
//!
//! ## Example
//!
//! ```rust,ignore
//! use busbar_sf_auth::{AuthConfig, AuthResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), busbar_sf_auth::Error> {
//!     let auth = AuthConfig {
//!         username: Some("me@example.com".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let session = AuthResolver::new().resolve(&auth).await?;
//!     println!("{}", session.instance_url());
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod oauth;
mod org_cli;
mod resolver;
mod session;

pub use config::AuthConfig;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{normalize_login_url, OAuthClient, PasswordGrant, TokenExchange, TokenResponse};
pub use org_cli::{parse_org_display, OrgSessionSource, SfCli};
pub use resolver::{AuthResolver, AuthStrategy};
pub use session::{Session, DEFAULT_API_VERSION};

/// Default Salesforce login URL for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Default Salesforce login URL for sandbox.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";
