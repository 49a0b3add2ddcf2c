//! Normalizing requested objects into a generation plan.

use std::collections::{BTreeMap, BTreeSet};

use busbar_sf_codegen::{ObjectConfig, PlanEntry};
use serde::Deserialize;

/// One entry of the `sObjects` list: a bare name or a full options object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ObjectRequest {
    Name(String),
    Config(ObjectConfig),
}

impl ObjectRequest {
    pub fn api_name(&self) -> &str {
        match self {
            ObjectRequest::Name(name) => name,
            ObjectRequest::Config(config) => &config.api_name,
        }
    }
}

impl From<&str> for ObjectRequest {
    fn from(name: &str) -> Self {
        ObjectRequest::Name(name.to_string())
    }
}

/// Ordered list of objects to generate, one entry per request.
///
/// Order and duplicates follow the requests exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationPlan {
    entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a GenerationPlan {
    type Item = &'a PlanEntry;
    type IntoIter = std::slice::Iter<'a, PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Normalize requests into plan entries.
///
/// A bare name becomes an entry with `autoConvertNames = true`. An options
/// object keeps its settings and defaults `autoConvertNames` to true when absent.
pub fn plan(requests: &[ObjectRequest]) -> GenerationPlan {
    plan_with_exclusions(requests, &BTreeMap::new())
}

/// Like [`plan`], attaching excluded fields keyed by object api name.
pub fn plan_with_exclusions(
    requests: &[ObjectRequest],
    exclude: &BTreeMap<String, BTreeSet<String>>,
) -> GenerationPlan {
    let entries = requests
        .iter()
        .map(|request| {
            let entry = normalize(request);
            match exclude.get(&entry.api_name) {
                Some(fields) => entry.with_excluded_fields(fields.iter().cloned()),
                None => entry,
            }
        })
        .collect();
    GenerationPlan { entries }
}

fn normalize(request: &ObjectRequest) -> PlanEntry {
    match request {
        ObjectRequest::Name(name) => PlanEntry::new(name.as_str()),
        ObjectRequest::Config(config) => {
            let mut entry = PlanEntry::new(config.api_name.as_str())
                .with_auto_convert_names(config.auto_convert_names.unwrap_or(true));
            entry.class_name = config.class_name.clone();
            entry.field_mappings = config.field_mappings.clone();
            entry.extra = config.extra.clone();
            entry
        }
    }
}
