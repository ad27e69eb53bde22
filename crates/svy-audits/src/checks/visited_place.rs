//! Visited-place checks.

use svy_core::enums::Activity;
use svy_geo::distance_meters;

use super::{is_invalid_geography, is_outside_territory, missing_required_fields, valid_point};
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::VisitedPlaceAuditContext;

pub const VP_M_GEOGRAPHY: &str = "VP_M_Geography";
pub const VP_I_GEOGRAPHY: &str = "VP_I_Geography";
pub const VP_L_GEOGRAPHY_OUTSIDE_TERRITORY: &str = "VP_L_GeographyOutsideTerritory";
pub const VP_M_ACTIVITY: &str = "VP_M_Activity";
pub const VP_L_HOME_ACTIVITY_FAR_FROM_HOME: &str = "VP_L_HomeActivityFarFromHome";
pub const VP_M_REQUIRED_FIELDS: &str = "VP_M_RequiredFields";

/// Distance from the home geography beyond which a place whose activity is
/// "home" is reported (inclusive).
pub const HOME_ACTIVITY_MAX_DISTANCE_METERS: f64 = 200.0;

#[must_use]
pub fn registry<'a>() -> CheckRegistry<VisitedPlaceAuditContext<'a>> {
    CheckRegistry::new()
        .with(VP_M_GEOGRAPHY, AuditCheck::sync(missing_geography))
        .with(VP_I_GEOGRAPHY, AuditCheck::sync(invalid_geography))
        .with(VP_L_GEOGRAPHY_OUTSIDE_TERRITORY, AuditCheck::sync(outside_territory))
        .with(VP_M_ACTIVITY, AuditCheck::sync(missing_activity))
        .with(VP_L_HOME_ACTIVITY_FAR_FROM_HOME, AuditCheck::sync(home_activity_far_from_home))
        .with(VP_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<VisitedPlaceAuditContext<'a>> {
    CheckRegistry::new()
}

fn missing_geography(ctx: &VisitedPlaceAuditContext<'_>) -> CheckResult {
    if ctx.visited_place.geography.is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Visited place geography is missing")))
}

fn invalid_geography(ctx: &VisitedPlaceAuditContext<'_>) -> CheckResult {
    if !is_invalid_geography(ctx.visited_place.geography.as_ref()) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Visited place geography is not a valid point")))
}

fn outside_territory(ctx: &VisitedPlaceAuditContext<'_>) -> CheckResult {
    if !is_outside_territory(ctx.visited_place.geography.as_ref(), ctx.config) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning(
        "Visited place geography is outside the survey territory",
    )))
}

fn missing_activity(ctx: &VisitedPlaceAuditContext<'_>) -> CheckResult {
    if ctx.visited_place.activity.is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Visited place activity is missing")))
}

fn home_activity_far_from_home(ctx: &VisitedPlaceAuditContext<'_>) -> CheckResult {
    if ctx.visited_place.activity != Some(Activity::Home) {
        return Ok(None);
    }
    let place = valid_point(ctx.visited_place.geography.as_ref());
    let home = valid_point(ctx.home.and_then(|home| home.geography.as_ref()));
    let (Some(place), Some(home)) = (place, home) else {
        return Ok(None);
    };
    let distance = distance_meters(place, home);
    if distance < HOME_ACTIVITY_MAX_DISTANCE_METERS {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning(format!(
        "Visited place with a home activity is {distance:.0} m away from the home"
    ))))
}

fn required_fields(ctx: &VisitedPlaceAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.visited_place, ctx.config)
}
