//! Salesforce api names to TypeScript identifiers.

use convert_case::{Case, Casing};

/// Suffixes dropped when names are converted.
const CUSTOM_SUFFIXES: &[&str] = &["__c", "__r"];

/// Class name for an object: `My_Object__c` becomes `MyObject`.
pub fn class_name(api_name: &str, auto_convert: bool) -> String {
    if !auto_convert {
        return api_name.to_string();
    }
    convert(strip_suffix(api_name), Case::Pascal)
}

/// Property name for a field or relationship: `Parent_Account__r` becomes `parentAccount`.
pub fn property_name(api_name: &str, auto_convert: bool) -> String {
    if !auto_convert {
        return api_name.to_string();
    }
    convert(strip_suffix(api_name), Case::Camel)
}

fn strip_suffix(name: &str) -> &str {
    CUSTOM_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(name)
}

/// Convert with `case`, keeping the input when nothing convertible remains.
fn convert(name: &str, case: Case) -> String {
    let converted = name.to_case(case);
    if converted.is_empty() {
        name.to_string()
    } else {
        converted
    }
}
