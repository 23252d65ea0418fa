mod error;
mod geocode;
mod parcels;

pub use error::{truncate_detail, GisError};
pub use geocode::Geocoder;
pub use parcels::ParcelClient;
