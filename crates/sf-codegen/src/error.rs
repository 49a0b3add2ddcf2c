//! Error types for sf-codegen.

/// Result type alias for sf-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sf-codegen operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the org rejected the bearer token (HTTP 401).
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Http { status: 401, .. })
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The SObject name cannot be a Salesforce API name.
    #[error("Invalid SObject name: {0}")]
    InvalidSObject(String),

    /// Non-success HTTP status without a Salesforce error body.
    #[error("HTTP error: {status} {message}")]
    Http { status: u16, message: String },

    /// Salesforce API error response.
    #[error("Salesforce API error: {error_code} - {message}")]
    Salesforce { error_code: String, message: String },

    /// Connection or transport error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Error::with_source(ErrorKind::Json(err.to_string()), err);
        }
        let message = err.to_string();
        let sanitized = if message.contains("Bearer") || message.contains("token") {
            "HTTP request failed (details redacted for security)".to_string()
        } else {
            message
        };
        Error::with_source(ErrorKind::Connection(sanitized), err)
    }
}
