// src/domain/normalize.rs
//
// Maps raw ArcGIS features onto the canonical `PropertyRecord`. The
// upstream attribute schema is not fixed; field names drift between
// source revisions, so each logical field carries a priority-ordered
// list of accepted upstream names and the first present, non-null
// value wins.

use crate::domain::PropertyRecord;
use serde_json::Value;

pub const PARCEL_ID: &[&str] = &["PARCEL_ID", "ParcelID", "ACCOUNT", "Account", "OBJECTID"];
pub const ADDRESS: &[&str] = &["SITUS_ADDR", "SitusAddress", "SITUS", "Address"];
pub const OWNER: &[&str] = &["OWNER", "OwnerName", "OWNER_NAME"];
pub const LAND_VALUE: &[&str] = &["LAND_VALUE", "LandValue", "LANDVAL"];
pub const IMPROVEMENT_VALUE: &[&str] = &["IMPR_VALUE", "ImprovementValue", "IMPRVAL"];
pub const TOTAL_VALUE: &[&str] = &[
    "TOTAL_VALUE",
    "TotalValue",
    "MKT_VAL",
    "APPR_VALUE",
    "ApprValue",
];
pub const YEAR_BUILT: &[&str] = &["YEAR_BUILT", "YearBuilt"];
pub const LOT_SIZE: &[&str] = &["LOT_SIZE", "LotSize", "ACRES", "Acres"];
pub const LEGAL_DESC: &[&str] = &["LEGAL_DESC", "LegalDesc", "LEGAL_DESCRIPTION"];
pub const PROPERTY_CLASS: &[&str] = &["PROPERTY_CLASS", "PropClass", "PROP_CLASS"];
pub const LAND_USE: &[&str] = &["LAND_USE", "LandUse"];

static NULL: Value = Value::Null;

/// The feature's `attributes` object; `Null` when the feature has none,
/// which makes every lookup below come up empty.
pub fn attributes(feature: &Value) -> &Value {
    feature.get("attributes").unwrap_or(&NULL)
}

/// First present, non-null value among the aliases, in priority order.
fn first_present<'a>(attrs: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|name| attrs.get(name))
        .find(|v| !v.is_null())
}

/// String form of whatever raw value matched.
fn text_field(attrs: &Value, aliases: &[&str]) -> Option<String> {
    first_present(attrs, aliases).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn float_field(attrs: &Value, aliases: &[&str]) -> Option<f64> {
    first_present(attrs, aliases).and_then(try_parse_float)
}

fn int_field(attrs: &Value, aliases: &[&str]) -> Option<i64> {
    first_present(attrs, aliases).and_then(try_parse_int)
}

/// Absent on any conversion failure. A field that fails to parse must
/// never silently become zero.
pub fn try_parse_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Goes through a float intermediate so values serialized as "2005.0"
/// still land as 2005.
pub fn try_parse_int(value: &Value) -> Option<i64> {
    try_parse_float(value).map(|f| f as i64)
}

/// Pure and infallible: missing or malformed fields degrade to `None`.
pub fn normalize(feature: &Value) -> PropertyRecord {
    let attrs = attributes(feature);
    let geometry = feature.get("geometry");
    let x = geometry.and_then(|g| g.get("x")).and_then(Value::as_f64);
    let y = geometry.and_then(|g| g.get("y")).and_then(Value::as_f64);

    PropertyRecord {
        parcel_id: text_field(attrs, PARCEL_ID),
        address: text_field(attrs, ADDRESS),
        owner: text_field(attrs, OWNER),
        land_value: float_field(attrs, LAND_VALUE),
        improvement_value: float_field(attrs, IMPROVEMENT_VALUE),
        total_appraised_value: float_field(attrs, TOTAL_VALUE),
        year_built: int_field(attrs, YEAR_BUILT),
        lot_size: float_field(attrs, LOT_SIZE),
        legal_description: text_field(attrs, LEGAL_DESC),
        property_class: text_field(attrs, PROPERTY_CLASS),
        land_use: text_field(attrs, LAND_USE),
        longitude: x,
        latitude: y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_stay_absent() {
        let record = normalize(&json!({"attributes": {}}));
        assert_eq!(record.parcel_id, None);
        assert_eq!(record.owner, None);
        assert_eq!(record.land_value, None);
        assert_eq!(record.year_built, None);
        assert_eq!(record.longitude, None);
        assert_eq!(record.latitude, None);
    }

    #[test]
    fn feature_without_attributes_normalizes_to_empty_record() {
        let record = normalize(&json!({}));
        assert_eq!(record.address, None);
        assert_eq!(record.total_appraised_value, None);
    }

    #[test]
    fn non_numeric_values_degrade_to_absent_not_zero() {
        let record = normalize(&json!({
            "attributes": {
                "LAND_VALUE": "N/A",
                "IMPR_VALUE": true,
                "YEAR_BUILT": "unknown",
                "LOT_SIZE": null
            }
        }));
        assert_eq!(record.land_value, None);
        assert_eq!(record.improvement_value, None);
        assert_eq!(record.year_built, None);
        assert_eq!(record.lot_size, None);
    }

    #[test]
    fn earlier_alias_wins() {
        let record = normalize(&json!({
            "attributes": {
                "ParcelID": "later",
                "PARCEL_ID": "first"
            }
        }));
        assert_eq!(record.parcel_id.as_deref(), Some("first"));
    }

    #[test]
    fn null_alias_falls_through_to_next() {
        let record = normalize(&json!({
            "attributes": {
                "PARCEL_ID": null,
                "ACCOUNT": "A-100"
            }
        }));
        assert_eq!(record.parcel_id.as_deref(), Some("A-100"));
    }

    #[test]
    fn numeric_parcel_id_becomes_its_string_form() {
        let record = normalize(&json!({"attributes": {"OBJECTID": 4217}}));
        assert_eq!(record.parcel_id.as_deref(), Some("4217"));
    }

    #[test]
    fn year_built_parses_through_float_intermediate() {
        let record = normalize(&json!({"attributes": {"YEAR_BUILT": "2005.0"}}));
        assert_eq!(record.year_built, Some(2005));
    }

    #[test]
    fn numeric_strings_parse_as_floats() {
        let record = normalize(&json!({"attributes": {"LAND_VALUE": " 125000.5 "}}));
        assert_eq!(record.land_value, Some(125000.5));
    }

    #[test]
    fn geometry_populates_coordinates_only_when_numeric() {
        let record = normalize(&json!({
            "attributes": {},
            "geometry": {"x": -97.13, "y": 33.21}
        }));
        assert_eq!(record.longitude, Some(-97.13));
        assert_eq!(record.latitude, Some(33.21));

        let record = normalize(&json!({
            "attributes": {},
            "geometry": {"x": "not-a-number", "y": null}
        }));
        assert_eq!(record.longitude, None);
        assert_eq!(record.latitude, None);
    }

    #[test]
    fn full_feature_normalizes() {
        let record = normalize(&json!({
            "attributes": {
                "ACCOUNT": "R12345",
                "SITUS_ADDR": "456 Oak Ave",
                "OWNER_NAME": "SMITH JANE",
                "LANDVAL": 80000,
                "IMPRVAL": 220000,
                "MKT_VAL": 300000,
                "YearBuilt": 1998,
                "ACRES": 0.27,
                "LEGAL_DESCRIPTION": "LOT 4 BLK B OAKWOOD",
                "PROP_CLASS": "A1",
                "LandUse": "Single Family"
            },
            "geometry": {"x": -97.1, "y": 33.2}
        }));
        assert_eq!(record.parcel_id.as_deref(), Some("R12345"));
        assert_eq!(record.address.as_deref(), Some("456 Oak Ave"));
        assert_eq!(record.owner.as_deref(), Some("SMITH JANE"));
        assert_eq!(record.land_value, Some(80000.0));
        assert_eq!(record.improvement_value, Some(220000.0));
        assert_eq!(record.total_appraised_value, Some(300000.0));
        assert_eq!(record.year_built, Some(1998));
        assert_eq!(record.lot_size, Some(0.27));
        assert_eq!(record.legal_description.as_deref(), Some("LOT 4 BLK B OAKWOOD"));
        assert_eq!(record.property_class.as_deref(), Some("A1"));
        assert_eq!(record.land_use.as_deref(), Some("Single Family"));
    }
}
