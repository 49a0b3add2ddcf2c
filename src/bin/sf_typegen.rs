//! Generate TypeScript declarations for Salesforce SObjects.
//!
//! ```sh
//! sf-typegen --config typegen.json
//! sf-typegen -u dev@example.com -s Account,Contact -o src/types/sobjects.ts
//! RUST_LOG=debug sf-typegen -e -s Lead
//! ```
//!
//! Declarations go to stdout, logs to stderr.

use std::process::ExitCode;

use anyhow::Context;
use busbar_sf_typegen::CliArgs;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing();

    let result = busbar_sf_typegen::run(&args)
        .await
        .context("Failed to generate! Check config or cmd params!");

    match result {
        Ok(summary) => {
            info!(
                path = %summary.path.display(),
                persisted = summary.persisted,
                objects = summary.objects,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
