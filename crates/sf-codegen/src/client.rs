//! SObject describe over the REST API.

use busbar_sf_auth::Session;
use serde::Deserialize;
use tracing::instrument;

use crate::describe::DescribeSObjectResult;
use crate::error::{Error, ErrorKind, Result};

/// Describe client bound to one authenticated session.
///
/// The access token is redacted in Debug output.
#[derive(Clone)]
pub struct DescribeClient {
    session: Session,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for DescribeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescribeClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl DescribeClient {
    /// Create a client for the given session.
    pub fn new(session: Session) -> Self {
        Self::with_http_client(session, reqwest::Client::new())
    }

    /// Create a client on top of an existing HTTP client.
    pub fn with_http_client(session: Session, http_client: reqwest::Client) -> Self {
        Self {
            session,
            http_client,
        }
    }

    /// Get the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get detailed metadata for a specific SObject.
    ///
    /// This is equivalent to calling `/services/data/vXX.0/sobjects/{sobject}/describe`.
    #[instrument(skip(self))]
    pub async fn describe_sobject(&self, sobject: &str) -> Result<DescribeSObjectResult> {
        if !is_safe_sobject_name(sobject) {
            return Err(Error::new(ErrorKind::InvalidSObject(sobject.to_string())));
        }

        let url = format!("{}/sobjects/{}/describe", self.session.rest_api_url(), sobject);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.session.access_token())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(api_error(status, &body));
        }

        Ok(response.json().await?)
    }
}

/// Check that a name can be an SObject api name (letters, digits and
/// underscores, starting with a letter).
pub fn is_safe_sobject_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[derive(Debug, Deserialize)]
struct SalesforceApiError {
    #[serde(rename = "errorCode")]
    error_code: String,
    message: String,
}

/// Salesforce reports REST failures as `[{"errorCode": ..., "message": ...}]`.
fn api_error(status: reqwest::StatusCode, body: &str) -> Error {
    match serde_json::from_str::<Vec<SalesforceApiError>>(body) {
        Ok(errors) if !errors.is_empty() && status.as_u16() != 401 => {
            let error_code = errors[0].error_code.clone();
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Error::new(ErrorKind::Salesforce {
                error_code,
                message,
            })
        }
        _ => Error::new(ErrorKind::Http {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("request failed").to_string(),
        }),
    }
}
