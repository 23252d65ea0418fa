use astra::Response;
// errors.rs
use crate::gis::GisError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad request bodies) or the upstream GIS services.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// Geocoding produced no candidates; the user can correct the address.
    AddressNotFound,
    /// An external service failed, errored, or timed out.
    /// The detail is already truncated to a bounded length.
    Upstream(String),
    /// Export requested but the search matched zero parcels.
    NoResultsForExport,
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::AddressNotFound => write!(f, "Address not found"),
            ServerError::Upstream(msg) => write!(f, "Upstream service error: {msg}"),
            ServerError::NoResultsForExport => {
                write!(f, "No properties found for the specified criteria")
            }
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<GisError> for ServerError {
    fn from(err: GisError) -> Self {
        match err {
            GisError::AddressNotFound => ServerError::AddressNotFound,
            GisError::Upstream(detail) => ServerError::Upstream(detail),
        }
    }
}
