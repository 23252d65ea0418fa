// gis/parcels.rs
use crate::config::{AppConfig, USER_AGENT};
use crate::domain::Coordinate;
use crate::gis::{truncate_detail, GisError};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

const METERS_PER_MILE: f64 = 1609.34;

/// Queries county appraisal district parcels via an ArcGIS REST layer.
/// The layer URL comes from `AppConfig` (ARCGIS_PARCELS_URL override).
pub struct ParcelClient {
    client: Client,
    layer_url: String,
}

impl ParcelClient {
    pub fn new(config: &AppConfig) -> Result<Self, GisError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GisError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            layer_url: config.parcels_url.clone(),
        })
    }

    pub fn miles_to_meters(miles: f64) -> f64 {
        miles * METERS_PER_MILE
    }

    /// One "intersects within distance" query around `coord`.
    /// An empty `features` array is a valid result, not an error.
    pub fn query_nearby(
        &self,
        coord: &Coordinate,
        radius_miles: f64,
    ) -> Result<Vec<Value>, GisError> {
        let params = build_query_params(coord, radius_miles);

        let resp = self
            .client
            .get(format!("{}/query", self.layer_url))
            .query(&params)
            .send()
            .map_err(|e| GisError::Upstream(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| GisError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Err(GisError::Upstream(format!(
                "Parcel query failed: {}",
                truncate_detail(&text)
            )));
        }

        parse_features(&text)
    }
}

fn parse_features(text: &str) -> Result<Vec<Value>, GisError> {
    let data: Value = serde_json::from_str(text)
        .map_err(|e| GisError::Upstream(format!("Parcel query returned bad JSON: {e}")))?;

    // ArcGIS reports failures as an error object with a 200 status
    if let Some(err) = data.get("error") {
        return Err(GisError::Upstream(format!(
            "Parcel service error: {}",
            truncate_detail(&err.to_string())
        )));
    }

    let features = match data.get("features").and_then(Value::as_array) {
        Some(arr) => arr.clone(),
        None => Vec::new(),
    };

    Ok(features)
}

fn build_query_params(coord: &Coordinate, radius_miles: f64) -> Vec<(&'static str, String)> {
    vec![
        ("f", "json".to_string()),
        ("where", "1=1".to_string()),
        (
            "geometry",
            format!("{},{}", coord.longitude, coord.latitude),
        ),
        ("geometryType", "esriGeometryPoint".to_string()),
        ("inSR", "4326".to_string()),
        ("spatialRel", "esriSpatialRelIntersects".to_string()),
        (
            "distance",
            ParcelClient::miles_to_meters(radius_miles).to_string(),
        ),
        ("units", "esriSRUnit_Meter".to_string()),
        ("outFields", "*".to_string()),
        ("outSR", "4326".to_string()),
        ("returnGeometry", "true".to_string()),
    ]
}
