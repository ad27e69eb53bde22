//! Interview-level checks.

use chrono::{DateTime, Utc};
use svy_core::entities::Interview;

use super::{is_blank, missing_required_fields};
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::InterviewAuditContext;

pub const I_M_STARTED_AT: &str = "I_M_StartedAt";
pub const I_L_STARTED_BEFORE_SURVEY_START: &str = "I_L_StartedBeforeSurveyStart";
pub const I_L_STARTED_AFTER_SURVEY_END: &str = "I_L_StartedAfterSurveyEnd";
pub const I_M_ACCESS_CODE: &str = "I_M_AccessCode";
pub const I_I_ACCESS_CODE: &str = "I_I_AccessCode";
pub const I_M_LANGUAGES: &str = "I_M_Languages";
pub const I_M_REQUIRED_FIELDS: &str = "I_M_RequiredFields";

#[must_use]
pub fn registry<'a>() -> CheckRegistry<InterviewAuditContext<'a>> {
    CheckRegistry::new()
        .with(I_M_STARTED_AT, AuditCheck::sync(missing_started_at))
        .with(I_L_STARTED_BEFORE_SURVEY_START, AuditCheck::sync(started_before_survey_start))
        .with(I_L_STARTED_AFTER_SURVEY_END, AuditCheck::sync(started_after_survey_end))
        .with(I_M_ACCESS_CODE, AuditCheck::sync(missing_access_code))
        .with(I_I_ACCESS_CODE, AuditCheck::sync(invalid_access_code))
        .with(I_M_LANGUAGES, AuditCheck::sync(missing_languages))
        .with(I_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<InterviewAuditContext<'a>> {
    CheckRegistry::new()
}

/// Interview start as an absolute instant. Missing, non-finite, or
/// out-of-range values yield `None`.
#[allow(clippy::cast_possible_truncation)]
fn started_at(interview: &Interview) -> Option<DateTime<Utc>> {
    let seconds = interview.started_at.filter(|s| s.is_finite())?;
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

fn missing_started_at(ctx: &InterviewAuditContext<'_>) -> CheckResult {
    if started_at(ctx.interview).is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Interview start time is missing")))
}

fn started_before_survey_start(ctx: &InterviewAuditContext<'_>) -> CheckResult {
    let (Some(started), Some(start)) = (started_at(ctx.interview), ctx.config.survey_start()) else {
        return Ok(None);
    };
    if started >= start {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error(format!(
        "Interview started at {} before the survey start {start}",
        started.to_rfc3339()
    ))))
}

fn started_after_survey_end(ctx: &InterviewAuditContext<'_>) -> CheckResult {
    let (Some(started), Some(end)) = (started_at(ctx.interview), ctx.config.survey_end()) else {
        return Ok(None);
    };
    if started <= end {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error(format!(
        "Interview started at {} after the survey end {end}",
        started.to_rfc3339()
    ))))
}

fn missing_access_code(ctx: &InterviewAuditContext<'_>) -> CheckResult {
    if !is_blank(ctx.interview.access_code.as_deref()) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning("Interview access code is missing")))
}

fn invalid_access_code(ctx: &InterviewAuditContext<'_>) -> CheckResult {
    let Some(validator) = ctx.config.access_code_validator.as_ref() else {
        return Ok(None);
    };
    let Some(code) = ctx.interview.access_code.as_deref().filter(|c| !c.trim().is_empty()) else {
        return Ok(None);
    };
    if validator.is_valid(code) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error(format!(
        "Interview access code '{code}' has an invalid format"
    ))))
}

fn missing_languages(ctx: &InterviewAuditContext<'_>) -> CheckResult {
    if ctx.interview.languages.iter().any(|l| !l.trim().is_empty()) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning("Interview language is missing")))
}

fn required_fields(ctx: &InterviewAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.interview, ctx.config)
}
