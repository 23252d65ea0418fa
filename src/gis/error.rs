use std::error::Error;
use std::fmt;

/// Upstream error bodies can be arbitrarily large; keep diagnostics bounded.
const MAX_DETAIL_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub enum GisError {
    /// The address lookup returned zero candidates.
    AddressNotFound,
    /// Non-success status, erroring payload, or timeout from an external
    /// service. Carries a truncated diagnostic detail.
    Upstream(String),
}

impl fmt::Display for GisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GisError::AddressNotFound => write!(f, "Address not found"),
            GisError::Upstream(msg) => write!(f, "Upstream error: {msg}"),
        }
    }
}

impl Error for GisError {}

/// Truncate an upstream response body to `MAX_DETAIL_LEN` bytes,
/// backing off to the nearest character boundary.
pub fn truncate_detail(body: &str) -> String {
    if body.len() <= MAX_DETAIL_LEN {
        return body.to_string();
    }
    let mut end = MAX_DETAIL_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
