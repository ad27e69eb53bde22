//! Segment-level checks.

use svy_core::enums::Mode;

use super::missing_required_fields;
use super::person::{MIN_DRIVING_AGE, valid_age};
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::SegmentAuditContext;

pub const S_M_MODE: &str = "S_M_Mode";
pub const S_I_MODE: &str = "S_I_Mode";
pub const S_L_DRIVER_WITHOUT_LICENSE: &str = "S_L_DriverWithoutLicense";
pub const S_L_DRIVER_TOO_YOUNG: &str = "S_L_DriverTooYoung";
pub const S_M_REQUIRED_FIELDS: &str = "S_M_RequiredFields";

#[must_use]
pub fn registry<'a>() -> CheckRegistry<SegmentAuditContext<'a>> {
    CheckRegistry::new()
        .with(S_M_MODE, AuditCheck::sync(missing_mode))
        .with(S_I_MODE, AuditCheck::sync(invalid_mode))
        .with(S_L_DRIVER_WITHOUT_LICENSE, AuditCheck::sync(driver_without_license))
        .with(S_L_DRIVER_TOO_YOUNG, AuditCheck::sync(driver_too_young))
        .with(S_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<SegmentAuditContext<'a>> {
    CheckRegistry::new()
}

fn is_car_driver(ctx: &SegmentAuditContext<'_>) -> bool {
    ctx.segment.mode == Some(Mode::CarDriver)
}

fn missing_mode(ctx: &SegmentAuditContext<'_>) -> CheckResult {
    if ctx.segment.mode.is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Segment mode is missing")))
}

fn invalid_mode(ctx: &SegmentAuditContext<'_>) -> CheckResult {
    if ctx.segment.mode != Some(Mode::Unknown) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Segment mode is not a known mode")))
}

fn driver_without_license(ctx: &SegmentAuditContext<'_>) -> CheckResult {
    if !is_car_driver(ctx) || ctx.person.driving_license_owner != Some(false) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning(
        "Segment is driven by a person who declared no driving license",
    )))
}

fn driver_too_young(ctx: &SegmentAuditContext<'_>) -> CheckResult {
    if !is_car_driver(ctx) {
        return Ok(None);
    }
    match valid_age(ctx.person) {
        Some(age) if age < MIN_DRIVING_AGE => Ok(Some(CheckOutcome::warning(format!(
            "Segment is driven by a person aged {age}"
        )))),
        _ => Ok(None),
    }
}

fn required_fields(ctx: &SegmentAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.segment, ctx.config)
}
