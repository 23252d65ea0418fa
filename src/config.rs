// config.rs
use std::env;

/// Default ArcGIS layer for Denton County Appraisal District parcels.
/// The county occasionally moves this; override with ARCGIS_PARCELS_URL.
const DEFAULT_PARCELS_URL: &str =
    "https://gis.dentoncounty.gov/arcgis/rest/services/DCAD_public/MapServer/0";

const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Identifies us to Nominatim, which rejects anonymous clients.
pub const USER_AGENT: &str = "flames-blue-dcad-app/1.0 (contact: support@flames.blue)";

/// Process configuration, resolved once in `main` and shared by reference.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub parcels_url: String,
    pub geocoder_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let parcels_url =
            env::var("ARCGIS_PARCELS_URL").unwrap_or_else(|_| DEFAULT_PARCELS_URL.to_string());
        let geocoder_url =
            env::var("GEOCODER_URL").unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        AppConfig {
            parcels_url,
            geocoder_url,
            port,
        }
    }
}
