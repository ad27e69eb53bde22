//! Household-level checks.

use super::missing_required_fields;
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::HouseholdAuditContext;

pub const HH_M_SIZE: &str = "HH_M_Size";
pub const HH_I_SIZE: &str = "HH_I_Size";
pub const HH_L_SIZE_MEMBERS_MISMATCH: &str = "HH_L_SizeMembersMismatch";
pub const HH_M_REQUIRED_FIELDS: &str = "HH_M_RequiredFields";

/// Largest household size accepted as plausible.
pub const MAX_HOUSEHOLD_SIZE: i64 = 20;

#[must_use]
pub fn registry<'a>() -> CheckRegistry<HouseholdAuditContext<'a>> {
    CheckRegistry::new()
        .with(HH_M_SIZE, AuditCheck::sync(missing_size))
        .with(HH_I_SIZE, AuditCheck::sync(invalid_size))
        .with(HH_L_SIZE_MEMBERS_MISMATCH, AuditCheck::sync(size_members_mismatch))
        .with(HH_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<HouseholdAuditContext<'a>> {
    CheckRegistry::new()
}

fn valid_size(size: i64) -> bool {
    (1..=MAX_HOUSEHOLD_SIZE).contains(&size)
}

fn missing_size(ctx: &HouseholdAuditContext<'_>) -> CheckResult {
    if ctx.household.size.is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Household size is missing")))
}

fn invalid_size(ctx: &HouseholdAuditContext<'_>) -> CheckResult {
    match ctx.household.size {
        Some(size) if !valid_size(size) => Ok(Some(CheckOutcome::error(format!(
            "Household size {size} is outside 1..={MAX_HOUSEHOLD_SIZE}"
        )))),
        _ => Ok(None),
    }
}

fn size_members_mismatch(ctx: &HouseholdAuditContext<'_>) -> CheckResult {
    let members = ctx.household.members.len();
    let Some(size) = ctx.household.size.filter(|size| valid_size(*size)) else {
        return Ok(None);
    };
    if members == 0 || usize::try_from(size).is_ok_and(|size| size == members) {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::warning(format!(
        "Household size is {size} but {members} members were entered"
    ))))
}

fn required_fields(ctx: &HouseholdAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.household, ctx.config)
}
