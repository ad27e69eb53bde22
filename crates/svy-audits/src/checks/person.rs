//! Person-level checks.

use svy_core::entities::Person;

use super::missing_required_fields;
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::PersonAuditContext;

pub const P_M_AGE: &str = "P_M_Age";
pub const P_I_AGE: &str = "P_I_Age";
pub const P_L_DRIVING_LICENSE_TOO_YOUNG: &str = "P_L_DrivingLicenseTooYoung";
pub const P_M_REQUIRED_FIELDS: &str = "P_M_RequiredFields";

pub const MAX_AGE: i64 = 115;
/// Youngest age at which driving is plausible.
pub const MIN_DRIVING_AGE: i64 = 16;

#[must_use]
pub fn registry<'a>() -> CheckRegistry<PersonAuditContext<'a>> {
    CheckRegistry::new()
        .with(P_M_AGE, AuditCheck::sync(missing_age))
        .with(P_I_AGE, AuditCheck::sync(invalid_age))
        .with(P_L_DRIVING_LICENSE_TOO_YOUNG, AuditCheck::sync(driving_license_too_young))
        .with(P_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<PersonAuditContext<'a>> {
    CheckRegistry::new()
}

/// Age, if answered and plausible.
pub(crate) fn valid_age(person: &Person) -> Option<i64> {
    person.age.filter(|age| (0..=MAX_AGE).contains(age))
}

fn missing_age(ctx: &PersonAuditContext<'_>) -> CheckResult {
    if ctx.person.age.is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Person age is missing")))
}

fn invalid_age(ctx: &PersonAuditContext<'_>) -> CheckResult {
    match ctx.person.age {
        Some(age) if valid_age(ctx.person).is_none() => Ok(Some(CheckOutcome::error(format!(
            "Person age {age} is outside 0..={MAX_AGE}"
        )))),
        _ => Ok(None),
    }
}

fn driving_license_too_young(ctx: &PersonAuditContext<'_>) -> CheckResult {
    if ctx.person.driving_license_owner != Some(true) {
        return Ok(None);
    }
    match valid_age(ctx.person) {
        Some(age) if age < MIN_DRIVING_AGE => Ok(Some(CheckOutcome::warning(format!(
            "Person aged {age} declares a driving license"
        )))),
        _ => Ok(None),
    }
}

fn required_fields(ctx: &PersonAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.person, ctx.config)
}
