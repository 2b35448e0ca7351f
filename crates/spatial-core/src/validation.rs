//! Field validation applied before anything is written

use crate::error::{Result, SpatialError};
use spatial_types::{NewPoint, NewPolygon, Point, Polygon, MAX_NAME_LEN};

/// Checks that cannot be expressed by deserialization alone
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn validate_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(SpatialError::Validation(format!(
            "name must be at most {} characters, got {}",
            MAX_NAME_LEN, len
        )));
    }
    Ok(())
}

impl Validate for NewPoint {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for Point {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for NewPolygon {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

impl Validate for Polygon {
    fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}
