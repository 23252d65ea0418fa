// search.rs
//
// Orchestrates one property search: geocode the address, query parcels
// around the point, normalize each raw feature, then optionally keep
// only single-family parcels. The two network seams are traits so the
// ordering rules can be tested without live services.

use crate::domain::{is_single_family, normalize, Coordinate, PropertyRecord, SearchRequest};
use crate::domain::normalize::attributes;
use crate::gis::{Geocoder, GisError, ParcelClient};
use serde_json::Value;

pub trait Geocode {
    fn geocode(&self, full_address: &str) -> Result<Coordinate, GisError>;
}

pub trait ParcelQuery {
    fn query_nearby(&self, coord: &Coordinate, radius_miles: f64) -> Result<Vec<Value>, GisError>;
}

impl Geocode for Geocoder {
    fn geocode(&self, full_address: &str) -> Result<Coordinate, GisError> {
        Geocoder::geocode(self, full_address)
    }
}

impl ParcelQuery for ParcelClient {
    fn query_nearby(&self, coord: &Coordinate, radius_miles: f64) -> Result<Vec<Value>, GisError> {
        ParcelClient::query_nearby(self, coord, radius_miles)
    }
}

/// Runs one search. Failures from geocoding or the parcel query
/// propagate unchanged; zero matches is a valid empty result.
pub fn search_properties<G, P>(
    geocoder: &G,
    parcels: &P,
    req: &SearchRequest,
) -> Result<Vec<PropertyRecord>, GisError>
where
    G: Geocode,
    P: ParcelQuery,
{
    let coord = geocoder.geocode(&req.full_address())?;
    let features = parcels.query_nearby(&coord, req.radius_miles)?;

    let records: Vec<PropertyRecord> = features.iter().map(normalize).collect();

    // The filter runs on the raw feature, not the normalized record,
    // keeping positional correspondence between the two.
    if req.single_family_only {
        Ok(records
            .into_iter()
            .zip(features.iter())
            .filter(|(_, feature)| is_single_family(attributes(feature)))
            .map(|(record, _)| record)
            .collect())
    } else {
        Ok(records)
    }
}
