// gis/geocode.rs
use crate::config::{AppConfig, USER_AGENT};
use crate::domain::Coordinate;
use crate::gis::{truncate_detail, GisError};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Resolves a free-text address to coordinates via a Nominatim-style
/// address search. One request per call, no caching.
pub struct Geocoder {
    client: Client,
    url: String,
}

impl Geocoder {
    pub fn new(config: &AppConfig) -> Result<Self, GisError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| GisError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            url: config.geocoder_url.clone(),
        })
    }

    /// The caller must already have concatenated address and county.
    pub fn geocode(&self, full_address: &str) -> Result<Coordinate, GisError> {
        let params = [
            ("q", full_address),
            ("format", "json"),
            ("limit", "1"),
            ("addressdetails", "1"),
        ];

        let resp = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .map_err(|e| GisError::Upstream(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| GisError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Err(GisError::Upstream(format!(
                "Geocoding failed: {}",
                truncate_detail(&text)
            )));
        }

        parse_candidates(&text)
    }
}

/// Pull the first candidate's coordinates out of the lookup response.
/// An empty candidate list means the address itself was not found.
fn parse_candidates(text: &str) -> Result<Coordinate, GisError> {
    let results: Value = serde_json::from_str(text)
        .map_err(|e| GisError::Upstream(format!("Geocoding returned bad JSON: {e}")))?;

    let first = match results.as_array().and_then(|a| a.first()) {
        Some(item) => item,
        None => return Err(GisError::AddressNotFound),
    };

    let latitude = coord_field(first, "lat")?;
    let longitude = coord_field(first, "lon")?;

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

// Nominatim serializes lat/lon as strings; accept numbers too.
fn coord_field(item: &Value, key: &str) -> Result<f64, GisError> {
    let value = &item[key];
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| GisError::Upstream(format!("Geocoder candidate missing numeric '{key}'")))
}
