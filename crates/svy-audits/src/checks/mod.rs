//! Baseline check catalog, one module per level.
//!
//! Each module exposes its error codes as constants, a `registry()` with the
//! baseline checks, and an empty `extended_registry()` where projects add
//! their own rules (see [`merge_registries`](crate::check::merge_registries)).
//!
//! Error codes follow `<LEVEL>_<KIND>_<Subject>`: `M` for missing answers,
//! `I` for invalid answers, `L` for cross-field logic.
//!
//! Geography checks are layered: a distance or territory check passes
//! whenever the missing or invalid check on the same field would fire.

pub mod home;
pub mod household;
pub mod interview;
pub mod journey;
pub mod person;
pub mod segment;
pub mod trip;
pub mod visited_place;

use svy_core::geometry::{Geography, Point};
use svy_core::object::SurveyObject;

use crate::check::{CheckOutcome, CheckResult};
use crate::config::AuditConfig;

/// Report the configured required attributes `object` leaves unanswered.
pub(crate) fn missing_required_fields<O: SurveyObject>(object: &O, config: &AuditConfig) -> CheckResult {
    let missing: Vec<&str> = config
        .required_fields(O::OBJECT_TYPE)
        .iter()
        .map(String::as_str)
        .filter(|field| !object.has_value(field))
        .collect();

    if missing.is_empty() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error(format!(
        "Missing required {} fields: {}",
        O::OBJECT_TYPE,
        missing.join(", ")
    ))))
}

/// Geography present but not a usable point.
pub(crate) fn is_invalid_geography(geography: Option<&Geography>) -> bool {
    geography.is_some_and(|geography| geography.as_valid_point().is_none())
}

pub(crate) fn valid_point(geography: Option<&Geography>) -> Option<Point> {
    geography.and_then(Geography::as_valid_point)
}

/// Valid point outside a configured territory. No territory means no finding.
pub(crate) fn is_outside_territory(geography: Option<&Geography>, config: &AuditConfig) -> bool {
    match (valid_point(geography), config.territory()) {
        (Some(point), Some(territory)) => !territory.contains(point),
        _ => false,
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}
