//! Error types for a generation run.

use std::path::PathBuf;

/// Result type alias for busbar-sf-typegen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for a generation run.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Config file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Auth settings do not satisfy any strategy.
    #[error("Authentication configuration error: {0}")]
    AuthConfig(String),

    /// The sf CLI lookup or the OAuth exchange failed.
    #[error("Authentication failed: {0}")]
    AuthExchange(String),

    /// Generating one object failed; later objects were not attempted.
    #[error("Generation failed for {api_name}: {message}")]
    Generation { api_name: String, message: String },

    /// Writing the output file failed.
    #[error("Could not write {}: {message}", path.display())]
    Persist { path: PathBuf, message: String },
}

impl From<busbar_sf_auth::Error> for Error {
    fn from(err: busbar_sf_auth::Error) -> Self {
        let message = err.to_string();
        let kind = if err.is_config_error() {
            ErrorKind::AuthConfig(message)
        } else {
            ErrorKind::AuthExchange(message)
        };
        Error::with_source(kind, err)
    }
}
