//! Command-line flags.
//!
//! Flag names follow the config file keys. `-h` is taken by `--oAuthHost`, so
//! help is only available as `--help`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Generate TypeScript declarations for Salesforce SObjects.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sf-typegen", version, disable_help_flag = true)]
pub struct CliArgs {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// JSON config file
    #[arg(long = "config", short = 'j', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Take auth from CLIENT_ID, CLIENT_SECRET, USERNAME, PASSWORD and HOST
    #[arg(short = 'e')]
    pub use_env: bool,

    /// Connected app consumer key
    #[arg(long = "clientId", short = 'c')]
    pub client_id: Option<String>,

    /// Connected app consumer secret
    #[arg(long = "clientSecret", short = 'x')]
    pub client_secret: Option<String>,

    /// Org username (alone: use the sf CLI session for it)
    #[arg(long = "username", short = 'u')]
    pub username: Option<String>,

    /// Password (with security token if required)
    #[arg(long = "password", short = 'p')]
    pub password: Option<String>,

    /// Login host for the username-password flow
    #[arg(long = "oAuthHost", short = 'h')]
    pub o_auth_host: Option<String>,

    /// Existing access token
    #[arg(long = "accessToken", short = 'a')]
    pub access_token: Option<String>,

    /// Instance URL for the access token
    #[arg(long = "instanceUrl", short = 'i')]
    pub instance_url: Option<String>,

    /// REST API version, e.g. 62.0
    #[arg(long = "apiVersion", value_name = "VERSION")]
    pub api_version: Option<String>,

    /// Output file (omitted: print only)
    #[arg(long = "outputFile", short = 'o', value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Comma-separated object names; replaces the config file list
    #[arg(long = "sObjects", short = 's', value_name = "NAMES")]
    pub s_objects: Option<String>,
}
