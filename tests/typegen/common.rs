//! Shared fakes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use busbar_sf_typegen::auth::{
    self, OrgSessionSource, PasswordGrant, Session, TokenExchange, TokenResponse,
};
use busbar_sf_typegen::codegen::{self, ObjectGenerator, PlanEntry};

/// Counts sf CLI lookups.
#[derive(Clone, Default)]
pub struct CountingOrgCli {
    pub calls: Arc<AtomicUsize>,
}

impl CountingOrgCli {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OrgSessionSource for CountingOrgCli {
    fn org_session(&self, _username: &str) -> auth::Result<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Session::new("https://cli.my.salesforce.com", "cli_token").with_api_version("61.0"))
    }
}

/// Counts password-grant exchanges.
#[derive(Clone, Default)]
pub struct CountingExchange {
    pub calls: Arc<AtomicUsize>,
}

impl CountingExchange {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenExchange for CountingExchange {
    async fn password_grant(&self, _grant: &PasswordGrant) -> auth::Result<TokenResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TokenResponse {
            access_token: "oauth_token".to_string(),
            instance_url: "https://oauth.my.salesforce.com".to_string(),
            id: None,
            token_type: Some("Bearer".to_string()),
            signature: None,
            issued_at: None,
        })
    }
}

/// Emits a fixed interface per entry, failing on one api name.
#[derive(Clone, Default)]
pub struct FakeGenerator {
    pub fail_on: Option<String>,
    pub seen: Arc<Mutex<Vec<String>>>,
}

impl FakeGenerator {
    pub fn failing_on(api_name: &str) -> Self {
        Self {
            fail_on: Some(api_name.to_string()),
            ..Default::default()
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectGenerator for FakeGenerator {
    async fn generate(&self, entry: &PlanEntry) -> codegen::Result<String> {
        self.seen.lock().unwrap().push(entry.api_name.clone());
        if self.fail_on.as_deref() == Some(entry.api_name.as_str()) {
            return Err(codegen::Error::new(codegen::ErrorKind::Http {
                status: 404,
                message: "NOT_FOUND".to_string(),
            }));
        }
        Ok(format!(
            "export interface {} {{\nid: string;\nname?: string;\n}}\n",
            entry.api_name
        ))
    }
}
