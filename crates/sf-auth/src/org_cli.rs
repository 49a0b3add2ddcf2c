//! Session lookup through the Salesforce CLI.
//!
//! The CLI keeps an authenticated session per org user; `sf org display`
//! hands it back as JSON. Requires the `sf` CLI to be installed and the org to
//! be authenticated.

use std::process::Command;

use tracing::{debug, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::session::{Session, DEFAULT_API_VERSION};

/// Source of a cached org session for a username or alias.
pub trait OrgSessionSource: Send + Sync {
    /// Look up the cached session. Blocks until the lookup finishes.
    fn org_session(&self, username: &str) -> Result<Session>;
}

/// Runs `sf org display --target-org <username> --json`.
#[derive(Debug, Clone)]
pub struct SfCli {
    program: String,
}

impl Default for SfCli {
    fn default() -> Self {
        Self::new()
    }
}

impl SfCli {
    /// Use the `sf` executable found on `PATH`.
    pub fn new() -> Self {
        Self::with_program("sf")
    }

    /// Use a specific executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl OrgSessionSource for SfCli {
    #[instrument(skip(self))]
    fn org_session(&self, username: &str) -> Result<Session> {
        let output = Command::new(&self.program)
            .args(["org", "display", "--target-org", username, "--json"])
            .output()
            .map_err(|e| {
                Error::with_source(
                    ErrorKind::SfdxCli(format!("Failed to run {} CLI: {}", self.program, e)),
                    e,
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                cli_message(&output.stdout).unwrap_or_else(|| output.status.to_string())
            } else {
                stderr.trim().to_string()
            };
            return Err(Error::new(ErrorKind::SfdxCli(format!(
                "sf org display failed: {}",
                detail
            ))));
        }

        debug!("sf org display succeeded");
        parse_org_display(&output.stdout)
    }
}

/// Extract a session from `sf org display --json` output.
pub fn parse_org_display(stdout: &[u8]) -> Result<Session> {
    let json: serde_json::Value = serde_json::from_slice(stdout).map_err(|e| {
        Error::with_source(
            ErrorKind::SfdxCli(format!("Unparsable sf CLI output: {}", e)),
            e,
        )
    })?;

    let result = json.get("result").ok_or_else(|| {
        Error::new(ErrorKind::SfdxCli("Missing 'result' in output".to_string()))
    })?;

    let instance_url = result
        .get("instanceUrl")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::new(ErrorKind::SfdxCli("Missing instanceUrl".to_string())))?;

    let access_token = result
        .get("accessToken")
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::new(ErrorKind::SfdxCli("Missing accessToken".to_string())))?;

    let api_version = result
        .get("apiVersion")
        .and_then(|v| v.as_str())
        .unwrap_or(DEFAULT_API_VERSION);

    Ok(Session::new(instance_url, access_token).with_api_version(api_version))
}

/// The CLI reports failures as JSON on stdout: `{"status": 1, "message": "..."}`.
fn cli_message(stdout: &[u8]) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(stdout).ok()?;
    json.get("message")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
