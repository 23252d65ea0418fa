use crate::config::AppConfig;
use crate::domain::{PropertyRecord, SearchRequest};
use crate::errors::ServerError;
use crate::gis::{Geocoder, ParcelClient};
use crate::responses::{html_response, json_response, with_cors, ResultResp};
use crate::search::search_properties;
use crate::spreadsheets::export_properties_xlsx;
use crate::templates;
use astra::{Body, Request, ResponseBuilder};
use serde_json::json;
use std::io::Read;

pub fn handle(req: Request, config: &AppConfig) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => json_response(&json!({
            "message": "Property search backend is running"
        })),

        ("GET", "/test") => json_response(&json!({
            "backend": "✅ Running",
            "database": "❌ Not Used",
        })),

        ("GET", "/ui") => html_response(templates::search_page()),

        ("POST", "/api/properties/search") => {
            let search = parse_search_request(req)?;
            let records = run_search(config, &search)?;
            json_response(&records)
        }

        ("POST", "/api/properties/export") => {
            let search = parse_search_request(req)?;
            let records = run_search(config, &search)?;
            export_properties_xlsx(&records)
        }

        // CORS preflight for the JSON API
        ("OPTIONS", _) => preflight_response(),

        _ => Err(ServerError::NotFound),
    }
}

/// Clients are constructed per request; searches share no state.
fn run_search(
    config: &AppConfig,
    search: &SearchRequest,
) -> Result<Vec<PropertyRecord>, ServerError> {
    let geocoder = Geocoder::new(config)?;
    let parcels = ParcelClient::new(config)?;
    let records = search_properties(&geocoder, &parcels, search)?;
    Ok(records)
}

fn parse_search_request(req: Request) -> Result<SearchRequest, ServerError> {
    let mut bytes = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;

    let search: SearchRequest = serde_json::from_slice(&bytes)
        .map_err(|e| ServerError::BadRequest(format!("Invalid search request: {e}")))?;

    search.validate().map_err(ServerError::BadRequest)?;

    Ok(search)
}

fn preflight_response() -> ResultResp {
    let resp = with_cors(ResponseBuilder::new())
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
