//! The per-object generation capability.

use async_trait::async_trait;
use busbar_sf_auth::Session;
use tracing::{debug, instrument};

use crate::client::DescribeClient;
use crate::error::Result;
use crate::options::PlanEntry;
use crate::typescript::{self, KnownTypes};

/// Produces the declaration text for one plan entry.
#[async_trait]
pub trait ObjectGenerator: Send + Sync {
    async fn generate(&self, entry: &PlanEntry) -> Result<String>;
}

/// Describes each object against the org and renders a TypeScript interface.
#[derive(Debug, Clone)]
pub struct DescribeGenerator {
    client: DescribeClient,
    known: KnownTypes,
}

impl DescribeGenerator {
    /// Generator for every entry of `plan`, talking to the org as `session`.
    pub fn new<'a>(session: Session, plan: impl IntoIterator<Item = &'a PlanEntry>) -> Self {
        Self::with_client(DescribeClient::new(session), plan)
    }

    /// Generator on top of an existing describe client.
    pub fn with_client<'a>(
        client: DescribeClient,
        plan: impl IntoIterator<Item = &'a PlanEntry>,
    ) -> Self {
        Self {
            client,
            known: typescript::known_types(plan),
        }
    }
}

#[async_trait]
impl ObjectGenerator for DescribeGenerator {
    #[instrument(skip(self, entry), fields(sobject = %entry.api_name))]
    async fn generate(&self, entry: &PlanEntry) -> Result<String> {
        let describe = self.client.describe_sobject(&entry.api_name).await?;
        debug!(
            fields = describe.fields.len(),
            children = describe.child_relationships.len(),
            "described"
        );
        Ok(typescript::render_interface(&describe, entry, &self.known))
    }
}
