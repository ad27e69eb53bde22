//! Trip-level checks.

use super::missing_required_fields;
use crate::check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult};
use crate::context::TripAuditContext;

pub const T_M_SEGMENTS: &str = "T_M_Segments";
pub const T_M_ORIGIN: &str = "T_M_Origin";
pub const T_M_DESTINATION: &str = "T_M_Destination";
pub const T_I_SAME_ORIGIN_DESTINATION: &str = "T_I_SameOriginDestination";
pub const T_I_UNKNOWN_VISITED_PLACE: &str = "T_I_UnknownVisitedPlace";
pub const T_M_REQUIRED_FIELDS: &str = "T_M_RequiredFields";

#[must_use]
pub fn registry<'a>() -> CheckRegistry<TripAuditContext<'a>> {
    CheckRegistry::new()
        .with(T_M_SEGMENTS, AuditCheck::sync(missing_segments))
        .with(T_M_ORIGIN, AuditCheck::sync(missing_origin))
        .with(T_M_DESTINATION, AuditCheck::sync(missing_destination))
        .with(T_I_SAME_ORIGIN_DESTINATION, AuditCheck::sync(same_origin_destination))
        .with(T_I_UNKNOWN_VISITED_PLACE, AuditCheck::sync(unknown_visited_place))
        .with(T_M_REQUIRED_FIELDS, AuditCheck::sync(required_fields))
}

#[must_use]
pub fn extended_registry<'a>() -> CheckRegistry<TripAuditContext<'a>> {
    CheckRegistry::new()
}

fn origin<'a>(ctx: &TripAuditContext<'a>) -> Option<&'a str> {
    non_blank(ctx.trip.origin_visited_place_uuid.as_deref())
}

fn destination<'a>(ctx: &TripAuditContext<'a>) -> Option<&'a str> {
    non_blank(ctx.trip.destination_visited_place_uuid.as_deref())
}

fn non_blank(uuid: Option<&str>) -> Option<&str> {
    uuid.filter(|uuid| !uuid.trim().is_empty())
}

fn missing_segments(ctx: &TripAuditContext<'_>) -> CheckResult {
    if !ctx.trip.segments.is_empty() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Trip has no segments")))
}

fn missing_origin(ctx: &TripAuditContext<'_>) -> CheckResult {
    if origin(ctx).is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Trip origin is missing")))
}

fn missing_destination(ctx: &TripAuditContext<'_>) -> CheckResult {
    if destination(ctx).is_some() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error("Trip destination is missing")))
}

fn same_origin_destination(ctx: &TripAuditContext<'_>) -> CheckResult {
    match (origin(ctx), destination(ctx)) {
        (Some(origin), Some(destination)) if origin == destination => Ok(Some(
            CheckOutcome::error("Trip origin and destination are the same visited place"),
        )),
        _ => Ok(None),
    }
}

fn unknown_visited_place(ctx: &TripAuditContext<'_>) -> CheckResult {
    let unknown: Vec<&str> = [origin(ctx), destination(ctx)]
        .into_iter()
        .flatten()
        .filter(|uuid| ctx.journey.visited_place(uuid).is_none())
        .collect();
    if unknown.is_empty() {
        return Ok(None);
    }
    Ok(Some(CheckOutcome::error(format!(
        "Trip refers to visited places not in its journey: {}",
        unknown.join(", ")
    ))))
}

fn required_fields(ctx: &TripAuditContext<'_>) -> CheckResult {
    missing_required_fields(ctx.trip, ctx.config)
}
