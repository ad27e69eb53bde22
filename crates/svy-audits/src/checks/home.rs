//! Home-level checks.
//!
//! The home geography is checked in layers: missing, then invalid, then
//! plausibility (territory, distance to the pre-interview geography). A
//! plausibility check never fires when a lower layer already did.

use svy_core::enums::AuditLevel;
use svy_geo::distance_meters;

use super::{is_invalid_geography, is_outside_territory, missing_required_fields, valid_point};
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::HomeAuditContext;

pub const HM_M_GEOGRAPHY: &str = "HM_M_Geography";
pub const HM_I_GEOGRAPHY: &str = "HM_I_Geography";
pub const HM_L_GEOGRAPHY_OUTSIDE_TERRITORY: &str = "HM_L_GeographyOutsideTerritory";
pub const HM_L_PRE_GEOGRAPHY_FAR_WARNING: &str = "HM_L_PreGeographyFarWarning";
pub const HM_L_PRE_GEOGRAPHY_FAR_ERROR: &str = "HM_L_PreGeographyFarError";
pub const HM_M_REQUIRED_FIELDS: &str = "HM_M_RequiredFields";

/// Distance between geography and pre-geography from which a warning is
/// reported (inclusive).
pub const HOME_PRE_GEOGRAPHY_WARNING_METERS: f64 = 50.0;
/// Distance between geography and pre-geography from which an error is
/// reported instead of a warning (inclusive).
pub const HOME_PRE_GEOGRAPHY_ERROR_METERS: f64 = 200.0;

#[must_use]
pub fn registry<'a>() -> CheckRegistry<HomeAuditContext<'a>> {
    CheckRegistry::new()
        .with(HM_M_GEOGRAPHY, AuditCheck::sync(missing_geography))
        .with(HM_I_GEOGRAPHY, AuditCheck::sync(invalid_geography))
        .with(HM_L_GEOGRAPHY_OUTSIDE_TERRITORY, AuditCheck::sync(outside_territory))
        .with(HM_L_PRE_GEOGRAPHY_FAR_WARNING, AuditCheck::sync(pre_geography_far_warning))
        .with(HM_L_PRE_GEOGRAPHY_FAR_ERROR, AuditCheck::sync(pre_geography_far_error))
        .with(HM_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<HomeAuditContext<'a>> {
    CheckRegistry::new()
}

/// Severity band for a geography/pre-geography distance.
///
/// `[50, 200)` meters is a warning, `200` and beyond an error, anything
/// shorter (or not a number) is fine.
#[must_use]
pub fn pre_geography_distance_band(distance: f64) -> Option<AuditLevel> {
    if distance >= HOME_PRE_GEOGRAPHY_ERROR_METERS {
        Some(AuditLevel::Error)
    } else if distance >= HOME_PRE_GEOGRAPHY_WARNING_METERS {
        Some(AuditLevel::Warning)
    } else {
        None
    }
}

/// Distance between the two home points, when both are valid.
fn pre_geography_distance(ctx: &HomeAuditContext<'_>) -> Option<f64> {
    let geography = valid_point(ctx.home.geography.as_ref())?;
    let pre_geography = valid_point(ctx.home.pre_geography.as_ref())?;
    Some(distance_meters(geography, pre_geography))
}

fn missing_geography(ctx: &HomeAuditContext<'_>) -> CheckResult {
    if ctx.home.geography.is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Home geography is missing")))
}

fn invalid_geography(ctx: &HomeAuditContext<'_>) -> CheckResult {
    if !is_invalid_geography(ctx.home.geography.as_ref()) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Home geography is not a valid point")))
}

fn outside_territory(ctx: &HomeAuditContext<'_>) -> CheckResult {
    if !is_outside_territory(ctx.home.geography.as_ref(), ctx.config) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning("Home geography is outside the survey territory")))
}

fn pre_geography_far_warning(ctx: &HomeAuditContext<'_>) -> CheckResult {
    let Some(distance) = pre_geography_distance(ctx) else {
        return Ok(None);
    };
    if pre_geography_distance_band(distance) != Some(AuditLevel::Warning) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning(format!(
        "Home geography is {distance:.0} m away from the pre-interview geography"
    ))))
}

fn pre_geography_far_error(ctx: &HomeAuditContext<'_>) -> CheckResult {
    let Some(distance) = pre_geography_distance(ctx) else {
        return Ok(None);
    };
    if pre_geography_distance_band(distance) != Some(AuditLevel::Error) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error(format!(
        "Home geography is {distance:.0} m away from the pre-interview geography"
    ))))
}

fn required_fields(ctx: &HomeAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.home, ctx.config)
}
