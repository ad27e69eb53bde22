//! # svy-geo
//!
//! Geospatial helpers for survey audits:
//! - great-circle distance between two points
//! - survey territory polygons with point containment
//! - the process-wide survey territory cache

mod distance;
mod error;
mod territory;

pub use distance::{EARTH_RADIUS_METERS, distance_meters};
pub use error::GeoError;
pub use territory::{SurveyTerritory, load_territory, survey_territory};
