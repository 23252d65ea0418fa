pub mod classify;
pub mod normalize;
pub mod record;

pub use classify::is_single_family;
pub use normalize::normalize;
pub use record::{Coordinate, PropertyRecord, SearchRequest};
