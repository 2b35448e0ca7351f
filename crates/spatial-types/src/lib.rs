//! Spatial Types - Pure record definitions
//!
//! This crate contains only the serde data types exchanged over the HTTP API
//! and handed to storage, with no runtime or database dependencies.

pub mod point;
pub mod polygon;
pub mod response;

pub use point::*;
pub use polygon::*;
pub use response::*;

use serde::{Deserialize, Serialize};

/// Maximum length of a record name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// The kinds of record the service stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Point,
    Polygon,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Point => write!(f, "Point"),
            RecordKind::Polygon => write!(f, "Polygon"),
        }
    }
}
