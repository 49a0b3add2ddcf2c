//! Layered configuration.
//!
//! Built in a fixed order, each layer overriding the last:
//!
//! 1. JSON config file (`--config`), if given
//! 2. Environment auth (`-e`): replaces the whole `auth` block
//! 3. Individual auth flags
//! 4. Output file flag
//! 5. Object list flag (`--sObjects`)

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use busbar_sf_auth::AuthConfig;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::cli::CliArgs;
use crate::error::{Error, ErrorKind, Result};
use crate::plan::ObjectRequest;

pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const ENV_USERNAME: &str = "USERNAME";
pub const ENV_PASSWORD: &str = "PASSWORD";
pub const ENV_HOST: &str = "HOST";

/// Effective settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default, rename = "sObjects")]
    pub s_objects: Vec<ObjectRequest>,
    /// Field api names to leave out, keyed by object api name.
    #[serde(default)]
    pub exclude: BTreeMap<String, BTreeSet<String>>,
    #[serde(default)]
    pub out_path: Option<PathBuf>,
}

impl Config {
    /// Parse a JSON config document.
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| {
            Error::with_source(ErrorKind::Config(format!("invalid config: {}", e)), e)
        })
    }
}

/// Read access to environment variables.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// One merge step over the config built so far.
pub type Layer = fn(&mut Config, &CliArgs, &dyn EnvSource);

/// Layers applied after the config file, in order.
pub const LAYERS: &[(&str, Layer)] = &[
    ("environment auth", apply_env_auth),
    ("auth flags", apply_auth_flags),
    ("output flag", apply_output_flag),
    ("object list flag", apply_object_list),
];

/// Build the effective config from flags, environment and an optional file.
///
/// `read_file` is only called when `--config` is present.
#[instrument(skip_all)]
pub fn load<F>(args: &CliArgs, env: &dyn EnvSource, read_file: F) -> Result<Config>
where
    F: FnOnce(&Path) -> io::Result<String>,
{
    let mut config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "reading config file");
            let contents = read_file(path).map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("cannot read {}: {}", path.display(), e)),
                    e,
                )
            })?;
            Config::from_json(&contents)?
        }
        None => Config::default(),
    };

    for (name, layer) in LAYERS {
        layer(&mut config, args, env);
        debug!(layer = *name, "applied");
    }

    Ok(config)
}

/// With `-e`, replace the auth block with values from the environment.
///
/// Token, instance URL and API version are cleared.
pub fn apply_env_auth(config: &mut Config, args: &CliArgs, env: &dyn EnvSource) {
    if !args.use_env {
        return;
    }
    config.auth = AuthConfig {
        client_id: env.var(ENV_CLIENT_ID),
        client_secret: env.var(ENV_CLIENT_SECRET),
        username: env.var(ENV_USERNAME),
        password: env.var(ENV_PASSWORD),
        o_auth_host: env.var(ENV_HOST),
        ..AuthConfig::default()
    };
}

/// Each auth flag that is present overrides its own field.
pub fn apply_auth_flags(config: &mut Config, args: &CliArgs, _env: &dyn EnvSource) {
    let auth = &mut config.auth;
    override_field(&mut auth.client_id, &args.client_id);
    override_field(&mut auth.client_secret, &args.client_secret);
    override_field(&mut auth.username, &args.username);
    override_field(&mut auth.password, &args.password);
    override_field(&mut auth.o_auth_host, &args.o_auth_host);
    override_field(&mut auth.access_token, &args.access_token);
    override_field(&mut auth.instance_url, &args.instance_url);
    override_field(&mut auth.api_version, &args.api_version);
}

pub fn apply_output_flag(config: &mut Config, args: &CliArgs, _env: &dyn EnvSource) {
    if let Some(path) = &args.output_file {
        config.out_path = Some(path.clone());
    }
}

/// Replace the object list with the names from `--sObjects`.
///
/// A list with no non-empty names leaves the current list alone.
pub fn apply_object_list(config: &mut Config, args: &CliArgs, _env: &dyn EnvSource) {
    let Some(list) = args.s_objects.as_deref() else {
        return;
    };
    let names = split_object_list(list);
    if names.is_empty() {
        debug!("ignoring empty object list");
        return;
    }
    config.s_objects = names.into_iter().map(ObjectRequest::Name).collect();
}

/// Split a comma-separated list, trimming names and dropping empty ones.
pub fn split_object_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn override_field(target: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *target = Some(value.clone());
    }
}
