// src/domain/classify.rs

use serde_json::Value;

/// Attribute names that may carry land-use or property-class codes,
/// covering the same naming drift the normalizer handles.
const CLASS_FIELDS: &[&str] = &[
    "LAND_USE",
    "LandUse",
    "PROPERTY_CLASS",
    "PropertyClass",
    "PROP_CLASS",
    "PropClass",
    "PROPERTY_TYPE",
];

/// Heuristic single-family check over a feature's raw attributes.
///
/// Concatenates the string forms of the candidate fields and looks for
/// "SINGLE" or "SF" in the uppercased text. Approximate, not
/// authoritative: "SF" can match inside unrelated codes, an accepted
/// tradeoff for tolerating the upstream's inconsistent coding schemes.
pub fn is_single_family(attrs: &Value) -> bool {
    let text = CLASS_FIELDS
        .iter()
        .map(|name| match attrs.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    text.contains("SINGLE") || text.contains("SF")
}
