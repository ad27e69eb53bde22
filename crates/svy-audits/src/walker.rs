//! Top-down traversal of an interview tree.

use svy_core::audit::AuditForObject;
use svy_core::entities::Interview;

use crate::check::{CheckRegistry, merge_registries};
use crate::checks;
use crate::config::AuditConfig;
use crate::context::{
    HomeAuditContext, HouseholdAuditContext, InterviewAuditContext, JourneyAuditContext,
    PersonAuditContext, SegmentAuditContext, TripAuditContext, VisitedPlaceAuditContext,
    build_home_context, build_household_context, build_interview_context, build_journey_context,
    build_person_context, build_segment_context, build_trip_context, build_visited_place_context,
};
use crate::error::CheckError;
use crate::runner::{
    run_home_audit_checks, run_household_audit_checks, run_interview_audit_checks,
    run_journey_audit_checks, run_person_audit_checks, run_segment_audit_checks,
    run_trip_audit_checks, run_visited_place_audit_checks,
};

/// One check registry per level.
#[derive(Debug, Clone, Default)]
pub struct AuditRegistries<'a> {
    pub interview: CheckRegistry<InterviewAuditContext<'a>>,
    pub household: CheckRegistry<HouseholdAuditContext<'a>>,
    pub home: CheckRegistry<HomeAuditContext<'a>>,
    pub person: CheckRegistry<PersonAuditContext<'a>>,
    pub journey: CheckRegistry<JourneyAuditContext<'a>>,
    pub visited_place: CheckRegistry<VisitedPlaceAuditContext<'a>>,
    pub trip: CheckRegistry<TripAuditContext<'a>>,
    pub segment: CheckRegistry<SegmentAuditContext<'a>>,
}

impl AuditRegistries<'_> {
    /// The baseline catalog merged with each level's extended catalog.
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            interview: merge_registries(checks::interview::registry(), checks::interview::extended_registry()),
            household: merge_registries(checks::household::registry(), checks::household::extended_registry()),
            home: merge_registries(checks::home::registry(), checks::home::extended_registry()),
            person: merge_registries(checks::person::registry(), checks::person::extended_registry()),
            journey: merge_registries(checks::journey::registry(), checks::journey::extended_registry()),
            visited_place: merge_registries(
                checks::visited_place::registry(),
                checks::visited_place::extended_registry(),
            ),
            trip: merge_registries(checks::trip::registry(), checks::trip::extended_registry()),
            segment: merge_registries(checks::segment::registry(), checks::segment::extended_registry()),
        }
    }

    /// Every registered error code, level by level.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.interview
            .codes()
            .chain(self.household.codes())
            .chain(self.home.codes())
            .chain(self.person.codes())
            .chain(self.journey.codes())
            .chain(self.visited_place.codes())
            .chain(self.trip.codes())
            .chain(self.segment.codes())
    }
}

/// Audit a whole interview: the interview itself, then its home, household,
/// and every person with their journeys, visited places, trips, and segments.
///
/// Findings come back in traversal order.
///
/// # Errors
///
/// Returns the first check failure; findings gathered before it are dropped.
pub async fn audit_interview<'a>(
    interview: &'a Interview,
    config: &'a AuditConfig,
    registries: &AuditRegistries<'a>,
) -> Result<Vec<AuditForObject>, CheckError> {
    let root = build_interview_context(interview, config);
    let mut audits = run_interview_audit_checks(&root, &registries.interview).await?;

    let home = interview.home.as_ref();
    if let Some(home) = home {
        let ctx = build_home_context(home, &root);
        audits.extend(run_home_audit_checks(&ctx, &registries.home).await?);
    }

    let household = interview.household.as_ref();
    let Some(household) = household else {
        tracing::debug!(interview_id = interview.id, audits = audits.len(), "interview audited");
        return Ok(audits);
    };
    let ctx = build_household_context(household, &root);
    audits.extend(run_household_audit_checks(&ctx, &registries.household).await?);

    for person in &household.members {
        let person_ctx = build_person_context(person, Some(household), home, &root);
        audits.extend(run_person_audit_checks(&person_ctx, &registries.person).await?);

        for journey in &person.journeys {
            let journey_ctx = build_journey_context(journey, &person_ctx);
            audits.extend(run_journey_audit_checks(&journey_ctx, &registries.journey).await?);

            for visited_place in &journey.visited_places {
                let ctx = build_visited_place_context(visited_place, &journey_ctx);
                audits.extend(run_visited_place_audit_checks(&ctx, &registries.visited_place).await?);
            }

            for trip in &journey.trips {
                let trip_ctx = build_trip_context(trip, &journey_ctx);
                audits.extend(run_trip_audit_checks(&trip_ctx, &registries.trip).await?);

                for segment in &trip.segments {
                    let ctx = build_segment_context(segment, &trip_ctx);
                    audits.extend(run_segment_audit_checks(&ctx, &registries.segment).await?);
                }
            }
        }
    }

    tracing::debug!(interview_id = interview.id, audits = audits.len(), "interview audited");
    Ok(audits)
}
