//! Response bodies shared by both resources

use crate::RecordKind;
use serde::{Deserialize, Serialize};

/// Body returned after a successful create or update
///
/// Deliberately carries no id: callers cannot learn a new record's id from
/// the create response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedResponse {
    pub message: String,
}

impl SavedResponse {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            message: format!("{} saved successfully", kind),
        }
    }
}

/// Body returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SavedResponse::new(RecordKind::Point).message,
            "Point saved successfully"
        );
        assert_eq!(
            SavedResponse::new(RecordKind::Polygon).message,
            "Polygon saved successfully"
        );
    }
}
