//! Config to file against a mock org.

use std::fs;

use busbar_sf_typegen::{generate, AuthResolver, Config, ErrorKind};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{CountingExchange, CountingOrgCli};

async fn mock_org() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Account/describe"))
        .and(header("Authorization", "Bearer test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Account",
            "label": "Account",
            "fields": [
                {"name": "Id", "label": "Account ID", "type": "id",
                 "createable": false, "updateable": false, "nillable": false},
                {"name": "Name", "label": "Account Name", "type": "string",
                 "createable": true, "updateable": true, "nillable": false},
                {"name": "Description", "label": "Description", "type": "textarea",
                 "createable": true, "updateable": true, "nillable": true}
            ],
            "childRelationships": [
                {"childSObject": "Contact", "field": "AccountId", "relationshipName": "Contacts"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Contact/describe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Contact",
            "label": "Contact",
            "fields": [
                {"name": "AccountId", "label": "Account ID", "type": "reference",
                 "createable": true, "updateable": true, "nillable": true,
                 "referenceTo": ["Account"], "relationshipName": "Account"}
            ]
        })))
        .mount(&server)
        .await;

    server
}

fn config(server: &MockServer, out: &std::path::Path) -> Config {
    let json = serde_json::json!({
        "auth": {"accessToken": "test_token", "instanceUrl": server.uri()},
        "sObjects": ["Account", {"apiName": "Contact"}],
        "exclude": {"Account": ["Description"]},
        "outPath": out,
    });
    Config::from_json(&json.to_string()).unwrap()
}

#[tokio::test]
async fn test_generate_writes_linked_interfaces() {
    let server = mock_org().await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sobjects.ts");
    let cli = CountingOrgCli::default();
    let exchange = CountingExchange::default();
    let resolver = AuthResolver::new()
        .with_org_session_source(cli.clone())
        .with_token_exchange(exchange.clone());
    let mut console = Vec::new();

    let summary = generate(&config(&server, &out), &resolver, &mut console)
        .await
        .unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(String::from_utf8(console).unwrap(), written);
    assert!(summary.persisted);
    assert_eq!(summary.objects, 2);

    assert!(written.contains("export interface Account {"));
    assert!(written.contains("    readonly id?: string;\n"));
    assert!(written.contains("    name: string;\n"));
    assert!(!written.contains("description"));
    assert!(written.contains("    contacts?: Contact[];\n"));
    assert!(written.contains("export interface Contact {"));
    assert!(written.contains("    account?: Account;\n"));

    assert_eq!(cli.calls(), 0);
    assert_eq!(exchange.calls(), 0);
}

#[tokio::test]
async fn test_unknown_object_fails_run() {
    let server = mock_org().await;
    Mock::given(method("GET"))
        .and(path("/services/data/v62.0/sobjects/Nope__c/describe"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!([
            {"errorCode": "NOT_FOUND", "message": "The requested resource does not exist"}
        ])))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sobjects.ts");
    let mut config = config(&server, &out);
    config.s_objects.push("Nope__c".into());

    let err = generate(&config, &AuthResolver::new(), &mut Vec::new())
        .await
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Generation { ref api_name, .. } if api_name == "Nope__c"));
    assert!(!out.exists());
}
