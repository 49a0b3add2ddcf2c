//! Strategy selection through the root error type.

use busbar_sf_typegen::{AuthConfig, AuthResolver, AuthStrategy, Error, ErrorKind};

use crate::common::{CountingExchange, CountingOrgCli};

fn resolver() -> (AuthResolver, CountingOrgCli, CountingExchange) {
    let cli = CountingOrgCli::default();
    let exchange = CountingExchange::default();
    let resolver = AuthResolver::new()
        .with_org_session_source(cli.clone())
        .with_token_exchange(exchange.clone());
    (resolver, cli, exchange)
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[tokio::test]
async fn test_access_token_uses_no_io() {
    let (resolver, cli, exchange) = resolver();
    let auth = AuthConfig {
        access_token: some("token"),
        instance_url: some("https://na1.salesforce.com"),
        username: some("also-set"),
        password: some("also-set"),
        ..Default::default()
    };

    assert_eq!(AuthStrategy::classify(&auth), AuthStrategy::AccessToken);
    let session = resolver.resolve(&auth).await.unwrap();

    assert_eq!(session.access_token(), "token");
    assert_eq!(cli.calls(), 0);
    assert_eq!(exchange.calls(), 0);
}

#[tokio::test]
async fn test_username_alone_uses_cli_only() {
    let (resolver, cli, exchange) = resolver();
    let auth = AuthConfig {
        username: some("dev@example.com"),
        ..Default::default()
    };

    let session = resolver.resolve(&auth).await.unwrap();

    assert_eq!(session.instance_url(), "https://cli.my.salesforce.com");
    assert_eq!(cli.calls(), 1);
    assert_eq!(exchange.calls(), 0);
}

#[tokio::test]
async fn test_username_password_uses_exchange_only() {
    let (resolver, cli, exchange) = resolver();
    let auth = AuthConfig {
        username: some("dev@example.com"),
        password: some("pw"),
        client_id: some("cid"),
        client_secret: some("secret"),
        ..Default::default()
    };

    let session = resolver.resolve(&auth).await.unwrap();

    assert_eq!(session.access_token(), "oauth_token");
    assert_eq!(cli.calls(), 0);
    assert_eq!(exchange.calls(), 1);
}

#[tokio::test]
async fn test_nothing_configured_fails_before_io() {
    let (resolver, cli, exchange) = resolver();
    let auth = AuthConfig {
        client_id: some("cid"),
        o_auth_host: some("login.salesforce.com"),
        ..Default::default()
    };

    let err: Error = resolver.resolve(&auth).await.unwrap_err().into();

    assert!(matches!(err.kind, ErrorKind::AuthConfig(_)));
    assert_eq!(cli.calls(), 0);
    assert_eq!(exchange.calls(), 0);
}

#[tokio::test]
async fn test_incomplete_cli_session_is_exchange_failure() {
    struct EmptyTokenOrgCli;
    impl busbar_sf_typegen::auth::OrgSessionSource for EmptyTokenOrgCli {
        fn org_session(
            &self,
            _username: &str,
        ) -> busbar_sf_typegen::auth::Result<busbar_sf_typegen::Session> {
            Ok(busbar_sf_typegen::Session::new("https://x.my.salesforce.com", ""))
        }
    }

    let resolver = AuthResolver::new().with_org_session_source(EmptyTokenOrgCli);
    let auth = AuthConfig {
        username: some("dev@example.com"),
        ..Default::default()
    };

    let err: Error = resolver.resolve(&auth).await.unwrap_err().into();

    assert!(matches!(err.kind, ErrorKind::AuthExchange(_)));
}
