use crate::errors::ServerError;
use crate::responses::with_cors;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into a JSON error response with the
/// appropriate status code.
pub fn error_to_response(err: ServerError) -> Response {
    let status = match &err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::AddressNotFound => 404,
        ServerError::Upstream(_) => 502,
        ServerError::NoResultsForExport => 404,
        ServerError::XlsxError(_) => 500,
        ServerError::InternalError => 500,
    };

    json_error_response(status, &err.to_string())
}

/// Build a `{"detail": ...}` error body, the shape the demo UI reads.
pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = json!({ "detail": message }).to_string();

    with_cors(ResponseBuilder::new())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
