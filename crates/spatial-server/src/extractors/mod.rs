//! Request extractors that reject with the service's JSON error body

pub mod json;
pub mod path;

pub use json::ValidJson;
pub use path::RecordId;
