//! HTTP handlers

pub mod health;
pub mod points;
pub mod polygons;

pub use health::health;
