//! Layered config precedence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use busbar_sf_typegen::config::load;
use busbar_sf_typegen::{AuthConfig, CliArgs, ObjectRequest};
use clap::Parser;

const FILE: &str = r#"{
    "auth": {
        "clientId": "file-id",
        "clientSecret": "file-secret",
        "username": "file-user",
        "password": "file-pass",
        "oAuthHost": "file.salesforce.com",
        "accessToken": "file-token",
        "instanceUrl": "https://file.my.salesforce.com",
        "apiVersion": "58.0"
    },
    "sObjects": ["Account"],
    "outPath": "file.ts"
}"#;

fn load_with(flags: &[&str], env: &HashMap<String, String>) -> busbar_sf_typegen::Config {
    let mut argv = vec!["sf-typegen", "--config", "typegen.json"];
    argv.extend_from_slice(flags);
    let args = CliArgs::try_parse_from(argv).unwrap();
    load(&args, env, |path: &Path| {
        assert_eq!(path, Path::new("typegen.json"));
        Ok(FILE.to_string())
    })
    .unwrap()
}

#[test]
fn test_file_values_without_flags() {
    let config = load_with(&[], &HashMap::new());

    assert_eq!(config.auth.client_id.as_deref(), Some("file-id"));
    assert_eq!(config.auth.api_version.as_deref(), Some("58.0"));
    assert_eq!(config.s_objects, vec![ObjectRequest::from("Account")]);
    assert_eq!(config.out_path, Some(PathBuf::from("file.ts")));
}

#[test]
fn test_each_flag_overrides_only_its_field() {
    type Getter = fn(&AuthConfig) -> Option<&str>;
    let cases: &[(&str, Getter)] = &[
        ("--clientId", |a| a.client_id.as_deref()),
        ("--clientSecret", |a| a.client_secret.as_deref()),
        ("--username", |a| a.username.as_deref()),
        ("--password", |a| a.password.as_deref()),
        ("--oAuthHost", |a| a.o_auth_host.as_deref()),
        ("--accessToken", |a| a.access_token.as_deref()),
        ("--instanceUrl", |a| a.instance_url.as_deref()),
        ("--apiVersion", |a| a.api_version.as_deref()),
    ];
    let baseline = load_with(&[], &HashMap::new()).auth;

    for (flag, get) in cases {
        let config = load_with(&[*flag, "from-flag"], &HashMap::new());
        assert_eq!(get(&config.auth), Some("from-flag"), "{flag}");

        for (other, get_other) in cases {
            if other != flag {
                assert_eq!(
                    get_other(&config.auth),
                    get_other(&baseline),
                    "{flag} changed {other}"
                );
            }
        }
    }
}

#[test]
fn test_output_and_object_flags_override_file() {
    let config = load_with(&["-o", "flag.ts", "-s", "Lead,Case"], &HashMap::new());

    assert_eq!(config.out_path, Some(PathBuf::from("flag.ts")));
    assert_eq!(
        config.s_objects,
        vec![ObjectRequest::from("Lead"), ObjectRequest::from("Case")]
    );
}

#[test]
fn test_env_auth_replaces_file_auth_exactly() {
    let env: HashMap<String, String> = [
        ("CLIENT_ID", "env-id"),
        ("CLIENT_SECRET", "env-secret"),
        ("USERNAME", "env-user"),
        ("PASSWORD", "env-pass"),
        ("HOST", "test.salesforce.com"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let config = load_with(&["-e"], &env);

    let expected = AuthConfig {
        client_id: Some("env-id".to_string()),
        client_secret: Some("env-secret".to_string()),
        username: Some("env-user".to_string()),
        password: Some("env-pass".to_string()),
        o_auth_host: Some("test.salesforce.com".to_string()),
        ..AuthConfig::default()
    };
    assert_eq!(config.auth, expected);
    assert_eq!(config.out_path, Some(PathBuf::from("file.ts")));
}

#[test]
fn test_env_auth_with_missing_variables() {
    let env: HashMap<String, String> =
        HashMap::from([("USERNAME".to_string(), "env-user".to_string())]);

    let config = load_with(&["-e"], &env);

    assert_eq!(
        config.auth,
        AuthConfig {
            username: Some("env-user".to_string()),
            ..AuthConfig::default()
        }
    );
}
