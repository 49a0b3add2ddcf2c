//! TypeScript interface emitter.
//!
//! One `export interface` per described object. Relationship members are only
//! emitted when the related object is generated in the same run, so every
//! type referenced by the output is also declared by it.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::describe::{DescribeSObjectResult, FieldDescribe};
use crate::naming;
use crate::options::PlanEntry;

/// Maps a Salesforce field type to a TypeScript type.
pub fn ts_type(field_type: &str) -> &'static str {
    match field_type {
        "id" | "reference" | "string" | "textarea" | "phone" | "url" | "email" | "picklist"
        | "combobox" | "encryptedstring" | "base64" | "time" => "string",
        "multipicklist" => "string[]",
        "boolean" => "boolean",
        "int" | "double" | "currency" | "percent" | "long" => "number",
        "date" | "datetime" => "Date",
        "address" | "location" => "Record<string, unknown>",
        _ => "unknown",
    }
}

/// Interface name generated for a plan entry.
pub fn interface_name(entry: &PlanEntry) -> String {
    entry
        .class_name
        .clone()
        .unwrap_or_else(|| naming::class_name(&entry.api_name, entry.auto_convert_names))
}

/// Lookup of generated interface names by lower-cased object api name.
pub type KnownTypes = BTreeMap<String, String>;

/// Build [`KnownTypes`] for every entry of a plan.
pub fn known_types<'a>(entries: impl IntoIterator<Item = &'a PlanEntry>) -> KnownTypes {
    entries
        .into_iter()
        .map(|entry| (entry.api_name.to_lowercase(), interface_name(entry)))
        .collect()
}

/// Render the declaration for one described object.
pub fn render_interface(
    describe: &DescribeSObjectResult,
    entry: &PlanEntry,
    known: &KnownTypes,
) -> String {
    let mut names = PropertyNames::default();
    let mut members = Vec::new();

    for field in &describe.fields {
        if field.deprecated_and_hidden == Some(true) || entry.is_excluded(&field.name) {
            continue;
        }

        let Some(name) = names.claim(&field.name, preferred_name(entry, &field.name)) else {
            debug!(field = %field.name, "property name already taken, skipping field");
            continue;
        };
        members.push(Member {
            doc: format!("{} ({})", field.label, field.name),
            readonly: field.is_read_only(),
            name,
            optional: field.is_optional(),
            ty: ts_type(&field.field_type).to_string(),
        });

        if let Some(member) = parent_relationship(field, entry, known, &mut names) {
            members.push(member);
        }
    }

    for child in &describe.child_relationships {
        if child.deprecated_and_hidden == Some(true) {
            continue;
        }
        let Some(relationship) = child.relationship_name.as_deref() else {
            continue;
        };
        if entry.is_excluded(relationship) {
            continue;
        }
        let Some(child_type) = known.get(&child.child_sobject.to_lowercase()) else {
            continue;
        };
        let Some(name) = names.claim(relationship, preferred_name(entry, relationship)) else {
            continue;
        };
        members.push(Member {
            doc: format!("{} ({}.{})", relationship, child.child_sobject, child.field),
            readonly: false,
            name,
            optional: true,
            ty: format!("{}[]", child_type),
        });
    }

    let mut out = String::new();
    out.push_str("/**\n");
    out.push_str(&format!(
        " * {}\n",
        doc_text(&format!("{} ({})", describe.label, describe.name))
    ));
    out.push_str(" */\n");
    out.push_str(&format!("export interface {} {{\n", interface_name(entry)));
    for member in &members {
        member.write_to(&mut out);
    }
    out.push_str("}\n");
    out
}

fn parent_relationship(
    field: &FieldDescribe,
    entry: &PlanEntry,
    known: &KnownTypes,
    names: &mut PropertyNames,
) -> Option<Member> {
    let relationship = field.relationship_name.as_deref()?;
    if entry.is_excluded(relationship) {
        return None;
    }

    let mut targets: Vec<&str> = Vec::new();
    for target in field.reference_targets() {
        if let Some(ty) = known.get(&target.to_lowercase()) {
            if !targets.contains(&ty.as_str()) {
                targets.push(ty);
            }
        }
    }
    if targets.is_empty() {
        return None;
    }

    let name = names.claim(relationship, preferred_name(entry, relationship))?;
    Some(Member {
        doc: format!("{} ({})", relationship, field.name),
        readonly: false,
        name,
        optional: true,
        ty: targets.join(" | "),
    })
}

fn preferred_name(entry: &PlanEntry, api_name: &str) -> String {
    entry
        .mapped_property(api_name)
        .map(str::to_string)
        .unwrap_or_else(|| naming::property_name(api_name, entry.auto_convert_names))
}

struct Member {
    doc: String,
    readonly: bool,
    name: String,
    optional: bool,
    ty: String,
}

impl Member {
    fn write_to(&self, out: &mut String) {
        out.push_str(&format!("    /** {} */\n", doc_text(&self.doc)));
        out.push_str(&format!(
            "    {}{}{}: {};\n",
            if self.readonly { "readonly " } else { "" },
            property_key(&self.name),
            if self.optional { "?" } else { "" },
            self.ty
        ));
    }
}

/// First come, first served. A converted name that is already taken falls
/// back to the raw api name.
#[derive(Default)]
struct PropertyNames {
    used: BTreeSet<String>,
}

impl PropertyNames {
    fn claim(&mut self, api_name: &str, preferred: String) -> Option<String> {
        if self.used.insert(preferred.clone()) {
            return Some(preferred);
        }
        if self.used.insert(api_name.to_string()) {
            return Some(api_name.to_string());
        }
        None
    }
}

fn doc_text(text: &str) -> String {
    text.replace("*/", "*\\/").replace(['\r', '\n'], " ")
}

fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if valid {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
