//! Describe types.
//!
//! The subset of the SObject describe payload that the emitter reads.
//! Unknown keys in the payload are ignored.

use serde::{Deserialize, Serialize};

// ============================================================================
// Describe SObject Types
// ============================================================================

/// SObject describe result from the Salesforce REST API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DescribeSObjectResult {
    // === Identity ===
    pub name: String,
    pub label: String,

    // === Relationships ===
    #[serde(rename = "childRelationships", default)]
    pub child_relationships: Vec<ChildRelationship>,
    #[serde(default)]
    pub fields: Vec<FieldDescribe>,
}

/// Child relationship metadata for an SObject.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChildRelationship {
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    pub field: String,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
    #[serde(rename = "deprecatedAndHidden")]
    pub deprecated_and_hidden: Option<bool>,
}

// ============================================================================
// Field Describe Types
// ============================================================================

/// Field describe result from the Salesforce REST API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldDescribe {
    // === Identity ===
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,

    // === Capabilities ===
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub nillable: bool,
    #[serde(rename = "defaultedOnCreate", default)]
    pub defaulted_on_create: bool,

    // === Relationships ===
    #[serde(rename = "referenceTo", default)]
    pub reference_to: Option<Vec<String>>,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,

    // === API Metadata ===
    #[serde(rename = "deprecatedAndHidden")]
    pub deprecated_and_hidden: Option<bool>,
}

impl FieldDescribe {
    /// Objects a reference field can point at (empty for other field types).
    pub fn reference_targets(&self) -> &[String] {
        self.reference_to.as_deref().unwrap_or_default()
    }

    /// True when the field can be neither set on insert nor changed later.
    pub fn is_read_only(&self) -> bool {
        !self.createable && !self.updateable
    }

    /// True when a record may legitimately omit the field.
    pub fn is_optional(&self) -> bool {
        self.nillable || self.defaulted_on_create || !self.createable
    }
}
