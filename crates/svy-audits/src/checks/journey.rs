//! Journey-level checks.

use chrono::NaiveDate;

use super::{is_blank, missing_required_fields};
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::JourneyAuditContext;

pub const J_M_START_DATE: &str = "J_M_StartDate";
pub const J_I_START_DATE: &str = "J_I_StartDate";
pub const J_L_END_BEFORE_START: &str = "J_L_EndBeforeStart";
pub const J_M_REQUIRED_FIELDS: &str = "J_M_RequiredFields";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[must_use]
pub fn registry<'a>() -> CheckRegistry<JourneyAuditContext<'a>> {
    CheckRegistry::new()
        .with(J_M_START_DATE, AuditCheck::sync(missing_start_date))
        .with(J_I_START_DATE, AuditCheck::sync(invalid_start_date))
        .with(J_L_END_BEFORE_START, AuditCheck::sync(end_before_start))
        .with(J_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<JourneyAuditContext<'a>> {
    CheckRegistry::new()
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value?.trim(), DATE_FORMAT).ok()
}

fn missing_start_date(ctx: &JourneyAuditContext<'_>) -> CheckResult {
    if !is_blank(ctx.journey.start_date.as_deref()) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Journey start date is missing")))
}

fn invalid_start_date(ctx: &JourneyAuditContext<'_>) -> CheckResult {
    let start_date = ctx.journey.start_date.as_deref();
    if is_blank(start_date) || parse_date(start_date).is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error(format!(
        "Journey start date '{}' is not a YYYY-MM-DD date",
        start_date.unwrap_or_default()
    ))))
}

fn end_before_start(ctx: &JourneyAuditContext<'_>) -> CheckResult {
    let start = parse_date(ctx.journey.start_date.as_deref());
    let end = parse_date(ctx.journey.end_date.as_deref());
    match (start, end) {
        (Some(start), Some(end)) if end < start => Ok(Some(CheckOutcome::error(format!(
            "Journey ends on {end}, before it starts on {start}"
        )))),
        _ => Ok(None),
    }
}

fn required_fields(ctx: &JourneyAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.journey, ctx.config)
}
