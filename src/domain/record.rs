// src/domain/record.rs

use serde::{Deserialize, Serialize};

/// One geocoded point, produced once per search and handed to the
/// spatial query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A parcel record in canonical shape, the only durable output of a
/// search. Every field is optional because upstream data is
/// inconsistently populated; a missing field stays `None` and is never
/// coerced to zero or an empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub parcel_id: Option<String>,
    pub address: Option<String>,
    pub owner: Option<String>,
    pub land_value: Option<f64>,
    pub improvement_value: Option<f64>,
    pub total_appraised_value: Option<f64>,
    pub year_built: Option<i64>,
    /// Lot size in sqft or acres depending on which source field matched.
    pub lot_size: Option<f64>,
    pub legal_description: Option<String>,
    pub property_class: Option<String>,
    pub land_use: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Street address to search around.
    pub address: String,
    /// County and state, appended to the address for disambiguation.
    #[serde(default = "default_county")]
    pub county: String,
    #[serde(default = "default_radius")]
    pub radius_miles: f64,
    #[serde(default = "default_single_family")]
    pub single_family_only: bool,
}

fn default_county() -> String {
    "Denton County, TX".to_string()
}

fn default_radius() -> f64 {
    2.0
}

fn default_single_family() -> bool {
    true
}

impl SearchRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.address.trim().is_empty() {
            return Err("address must not be empty".to_string());
        }
        if self.radius_miles <= 0.0 {
            return Err("radius_miles must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Disambiguated address handed to the geocoder.
    pub fn full_address(&self) -> String {
        format!("{}, {}", self.address, self.county)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply() {
        let req: SearchRequest = serde_json::from_str(r#"{"address": "123 Main St"}"#).unwrap();
        assert_eq!(req.county, "Denton County, TX");
        assert_eq!(req.radius_miles, 2.0);
        assert!(req.single_family_only);
        assert_eq!(req.full_address(), "123 Main St, Denton County, TX");
    }

    #[test]
    fn empty_address_is_invalid() {
        let req: SearchRequest = serde_json::from_str(r#"{"address": "  "}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn nonpositive_radius_is_invalid() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"address": "123 Main St", "radius_miles": 0.0}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
