//! Point types

use serde::{Deserialize, Serialize};

/// A stored point
///
/// Also the body of `PUT /point`, where `id` selects the row to overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Point creation request (`POST /point`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewPoint {
    /// Attach a server-assigned id
    pub fn with_id(self, id: i64) -> Point {
        Point {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
