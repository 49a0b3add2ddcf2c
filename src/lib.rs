//! # busbar-sf-typegen
//!
//! Generate TypeScript declarations for Salesforce SObjects.
//!
//! A run loads layered configuration, resolves a session through the
//! credential cascade, plans the requested objects, then describes and
//! renders each one in order.
//!
//! ## Security
//!
//! - Tokens, secrets and passwords are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages from HTTP failures are sanitized
//!
//! ## Crates
//!
//! - **busbar-sf-auth** - Session resolution: access token, sf CLI session, username-password flow
//! - **busbar-sf-codegen** - Describe, naming, TypeScript emitting and formatting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use busbar_sf_typegen::{generate, AuthResolver, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_json(r#"{
//!         "auth": {"username": "dev@example.com"},
//!         "sObjects": ["Account", "Contact"],
//!         "outPath": "src/types/sobjects.ts"
//!     }"#)?;
//!
//!     generate(&config, &AuthResolver::new(), &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

use std::io::Write;

use tracing::instrument;

pub mod cli;
pub mod config;
mod error;
pub mod orchestrator;
pub mod plan;

pub use busbar_sf_auth as auth;
pub use busbar_sf_codegen as codegen;

pub use busbar_sf_auth::{AuthConfig, AuthResolver, AuthStrategy, Session};
pub use busbar_sf_codegen::{DescribeGenerator, ObjectGenerator, PlanEntry};
pub use cli::CliArgs;
pub use config::{Config, EnvSource, ProcessEnv};
pub use error::{Error, ErrorKind, Result};
pub use orchestrator::{Orchestrator, OutputTarget, RunSummary, PREVIEW_PATH};
pub use plan::{plan, plan_with_exclusions, GenerationPlan, ObjectRequest};

/// Resolve a session for `config`, then generate every requested object.
#[instrument(skip_all, fields(objects = config.s_objects.len()))]
pub async fn generate<W: Write>(
    config: &Config,
    resolver: &AuthResolver,
    console: &mut W,
) -> Result<RunSummary> {
    let session = resolver.resolve(&config.auth).await?;

    let plan = plan_with_exclusions(&config.s_objects, &config.exclude);
    let generator = DescribeGenerator::new(session, &plan);

    Orchestrator::new(generator)
        .run(&plan, config.out_path.as_deref(), console)
        .await
}

/// Load configuration from `args` and the process environment, then generate
/// to stdout with the default credential sources.
pub async fn run(args: &CliArgs) -> Result<RunSummary> {
    let config = config::load(args, &ProcessEnv, |path| std::fs::read_to_string(path))?;
    generate(&config, &AuthResolver::new(), &mut std::io::stdout()).await
}
