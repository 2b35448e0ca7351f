//! Polygon types

use serde::{Deserialize, Serialize};

/// A stored polygon
///
/// `coordinates` is kept exactly as the client sent it. It usually holds a
/// serialized nested array such as `[[[x1, y1], [x2, y2], ...]]` but is never
/// parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: i64,
    pub name: String,
    pub coordinates: String,
}

/// Polygon creation request (`POST /polygon`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPolygon {
    pub name: String,
    pub coordinates: String,
}

impl NewPolygon {
    /// Attach a server-assigned id
    pub fn with_id(self, id: i64) -> Polygon {
        Polygon {
            id,
            name: self.name,
            coordinates: self.coordinates,
        }
    }
}
