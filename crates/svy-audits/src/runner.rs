//! Check runners.
//!
//! One generic runner does the work; the per-level functions pin its context
//! type so callers get a distinct entry point for each level.
//!
//! The runner does not catch anything: the first check returning `Err` ends
//! the run and its error is returned as-is, without the findings collected so
//! far. Entities without a usable identifier are skipped entirely, since a
//! finding must point at a real object.

use svy_core::audit::AuditForObject;

use crate::check::CheckRegistry;
use crate::context::{
    AuditContext, HomeAuditContext, HouseholdAuditContext, InterviewAuditContext,
    JourneyAuditContext, PersonAuditContext, SegmentAuditContext, TripAuditContext,
    VisitedPlaceAuditContext,
};
use crate::error::CheckError;

/// Run every check of `registry` against `context`, in registry order.
///
/// # Errors
///
/// Returns the error of the first failing check, unchanged.
pub async fn run_audit_checks<C: AuditContext>(
    context: &C,
    registry: &CheckRegistry<C>,
) -> Result<Vec<AuditForObject>, CheckError> {
    let Some(object_uuid) = context.subject_uuid() else {
        tracing::debug!(
            object_type = %C::OBJECT_TYPE,
            "object has no uuid; skipping audit checks"
        );
        return Ok(Vec::new());
    };

    let mut audits = Vec::new();
    for (error_code, check) in registry.iter() {
        let Some(outcome) = check.run(context).await? else {
            continue;
        };
        audits.push(AuditForObject {
            object_type: C::OBJECT_TYPE,
            object_uuid: object_uuid.to_string(),
            error_code: error_code.to_string(),
            version: outcome.version,
            level: outcome.level,
            message: outcome.message,
            ignore: false,
        });
    }
    Ok(audits)
}

macro_rules! level_runner {
    ($(#[$doc:meta])* $name:ident, $ctx:ident) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns the error of the first failing check, unchanged.
        pub async fn $name<'a>(
            context: &$ctx<'a>,
            registry: &CheckRegistry<$ctx<'a>>,
        ) -> Result<Vec<AuditForObject>, CheckError> {
            run_audit_checks(context, registry).await
        }
    };
}

level_runner!(
    /// Audit an interview.
    run_interview_audit_checks,
    InterviewAuditContext
);
level_runner!(
    /// Audit a household.
    run_household_audit_checks,
    HouseholdAuditContext
);
level_runner!(
    /// Audit a home.
    run_home_audit_checks,
    HomeAuditContext
);
level_runner!(
    /// Audit a person.
    run_person_audit_checks,
    PersonAuditContext
);
level_runner!(
    /// Audit a journey.
    run_journey_audit_checks,
    JourneyAuditContext
);
level_runner!(
    /// Audit a visited place.
    run_visited_place_audit_checks,
    VisitedPlaceAuditContext
);
level_runner!(
    /// Audit a trip.
    run_trip_audit_checks,
    TripAuditContext
);
level_runner!(
    /// Audit a trip segment.
    run_segment_audit_checks,
    SegmentAuditContext
);
