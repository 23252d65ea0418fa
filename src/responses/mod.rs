pub mod errors;
pub mod html;
pub mod json;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::error_to_response;
pub use html::html_response;
pub use json::json_response;
pub use xlsx::xlsx_response;

use astra::ResponseBuilder;

/// Permissive CORS, applied to every response so the demo UI (or any
/// frontend origin) can call the JSON API directly.
pub fn with_cors(builder: ResponseBuilder) -> ResponseBuilder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}
