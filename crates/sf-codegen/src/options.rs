//! Per-object generation options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Explicit property name for one field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    pub api_name: String,
    pub prop_name: String,
}

/// One requested object as written in the config file.
///
/// Keys this crate does not interpret are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectConfig {
    pub api_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_convert_names: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<FieldMapping>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ObjectConfig {
    /// Options for `api_name` with nothing else set.
    pub fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            auto_convert_names: None,
            class_name: None,
            field_mappings: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A fully-resolved generation request for one object.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub api_name: String,
    pub auto_convert_names: bool,
    pub class_name: Option<String>,
    pub field_mappings: Vec<FieldMapping>,
    /// Field (or relationship) api names left out of the declaration.
    pub excluded_fields: BTreeSet<String>,
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlanEntry {
    /// Entry for a bare object name: names are converted, nothing excluded.
    pub fn new(api_name: impl Into<String>) -> Self {
        Self {
            api_name: api_name.into(),
            auto_convert_names: true,
            class_name: None,
            field_mappings: Vec::new(),
            excluded_fields: BTreeSet::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Set whether api names are converted to TypeScript-style names.
    pub fn with_auto_convert_names(mut self, auto_convert_names: bool) -> Self {
        self.auto_convert_names = auto_convert_names;
        self
    }

    /// Leave these fields out of the declaration.
    pub fn with_excluded_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Property name mapped explicitly for `field_api_name`, if any.
    pub fn mapped_property(&self, field_api_name: &str) -> Option<&str> {
        self.field_mappings
            .iter()
            .find(|m| m.api_name == field_api_name)
            .map(|m| m.prop_name.as_str())
    }

    pub fn is_excluded(&self, field_api_name: &str) -> bool {
        self.excluded_fields.contains(field_api_name)
    }
}
