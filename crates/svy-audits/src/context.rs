//! Per-level audit contexts.
//!
//! A context bundles the entity under audit with borrowed references to every
//! ancestor on its path to the interview, plus the injected [`AuditConfig`].
//! Contexts are `Copy`, built fresh for each runner call, and never mutated.
//! Household and home are optional from the person level down: surveys that
//! do not collect them pass `None`, and builders carry that `None` onward.

use svy_core::entities::{
    Home, Household, Interview, Journey, Person, Segment, Trip, VisitedPlace,
};
use svy_core::enums::ObjectType;
use svy_core::object::SurveyObject;

use crate::config::AuditConfig;

/// A context the runner can audit.
pub trait AuditContext {
    /// Level of the entity under audit; stamped on every finding.
    const OBJECT_TYPE: ObjectType;

    /// Identifier of the entity under audit, if present and not blank.
    fn subject_uuid(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Copy)]
pub struct InterviewAuditContext<'a> {
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct HouseholdAuditContext<'a> {
    pub household: &'a Household,
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct HomeAuditContext<'a> {
    pub home: &'a Home,
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct PersonAuditContext<'a> {
    pub person: &'a Person,
    pub household: Option<&'a Household>,
    pub home: Option<&'a Home>,
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct JourneyAuditContext<'a> {
    pub journey: &'a Journey,
    pub person: &'a Person,
    pub household: Option<&'a Household>,
    pub home: Option<&'a Home>,
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct VisitedPlaceAuditContext<'a> {
    pub visited_place: &'a VisitedPlace,
    pub journey: &'a Journey,
    pub person: &'a Person,
    pub household: Option<&'a Household>,
    pub home: Option<&'a Home>,
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct TripAuditContext<'a> {
    pub trip: &'a Trip,
    pub journey: &'a Journey,
    pub person: &'a Person,
    pub household: Option<&'a Household>,
    pub home: Option<&'a Home>,
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct SegmentAuditContext<'a> {
    pub segment: &'a Segment,
    pub trip: &'a Trip,
    pub journey: &'a Journey,
    pub person: &'a Person,
    pub household: Option<&'a Household>,
    pub home: Option<&'a Home>,
    pub interview: &'a Interview,
    pub config: &'a AuditConfig,
}

macro_rules! audit_context {
    ($ctx:ident, $subject:ident, $object_type:expr) => {
        impl AuditContext for $ctx<'_> {
            const OBJECT_TYPE: ObjectType = $object_type;

            fn subject_uuid(&self) -> Option<&str> {
                self.$subject.valid_uuid()
            }
        }
    };
}

audit_context!(InterviewAuditContext, interview, ObjectType::Interview);
audit_context!(HouseholdAuditContext, household, ObjectType::Household);
audit_context!(HomeAuditContext, home, ObjectType::Home);
audit_context!(PersonAuditContext, person, ObjectType::Person);
audit_context!(JourneyAuditContext, journey, ObjectType::Journey);
audit_context!(VisitedPlaceAuditContext, visited_place, ObjectType::VisitedPlace);
audit_context!(TripAuditContext, trip, ObjectType::Trip);
audit_context!(SegmentAuditContext, segment, ObjectType::Segment);

#[must_use]
pub const fn build_interview_context<'a>(
    interview: &'a Interview,
    config: &'a AuditConfig,
) -> InterviewAuditContext<'a> {
    InterviewAuditContext { interview, config }
}

#[must_use]
pub const fn build_household_context<'a>(
    household: &'a Household,
    parent: &InterviewAuditContext<'a>,
) -> HouseholdAuditContext<'a> {
    HouseholdAuditContext {
        household,
        interview: parent.interview,
        config: parent.config,
    }
}

#[must_use]
pub const fn build_home_context<'a>(
    home: &'a Home,
    parent: &InterviewAuditContext<'a>,
) -> HomeAuditContext<'a> {
    HomeAuditContext {
        home,
        interview: parent.interview,
        config: parent.config,
    }
}

/// Household and home are passed explicitly: a person may be audited in a
/// survey that declares neither.
#[must_use]
pub const fn build_person_context<'a>(
    person: &'a Person,
    household: Option<&'a Household>,
    home: Option<&'a Home>,
    parent: &InterviewAuditContext<'a>,
) -> PersonAuditContext<'a> {
    PersonAuditContext {
        person,
        household,
        home,
        interview: parent.interview,
        config: parent.config,
    }
}

#[must_use]
pub const fn build_journey_context<'a>(
    journey: &'a Journey,
    parent: &PersonAuditContext<'a>,
) -> JourneyAuditContext<'a> {
    JourneyAuditContext {
        journey,
        person: parent.person,
        household: parent.household,
        home: parent.home,
        interview: parent.interview,
        config: parent.config,
    }
}

#[must_use]
pub const fn build_visited_place_context<'a>(
    visited_place: &'a VisitedPlace,
    parent: &JourneyAuditContext<'a>,
) -> VisitedPlaceAuditContext<'a> {
    VisitedPlaceAuditContext {
        visited_place,
        journey: parent.journey,
        person: parent.person,
        household: parent.household,
        home: parent.home,
        interview: parent.interview,
        config: parent.config,
    }
}

#[must_use]
pub const fn build_trip_context<'a>(
    trip: &'a Trip,
    parent: &JourneyAuditContext<'a>,
) -> TripAuditContext<'a> {
    TripAuditContext {
        trip,
        journey: parent.journey,
        person: parent.person,
        household: parent.household,
        home: parent.home,
        interview: parent.interview,
        config: parent.config,
    }
}

#[must_use]
pub const fn build_segment_context<'a>(
    segment: &'a Segment,
    parent: &TripAuditContext<'a>,
) -> SegmentAuditContext<'a> {
    SegmentAuditContext {
        segment,
        trip: parent.trip,
        journey: parent.journey,
        person: parent.person,
        household: parent.household,
        home: parent.home,
        interview: parent.interview,
        config: parent.config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interview() -> Interview {
        Interview {
            id: 1,
            uuid: Some("itv".into()),
            household: Some(Household {
                uuid: Some("hh".into()),
                members: vec![Person {
                    uuid: Some("per".into()),
                    journeys: vec![Journey {
                        uuid: Some("jo".into()),
                        trips: vec![Trip {
                            uuid: Some("tr".into()),
                            segments: vec![Segment {
                                uuid: Some("seg".into()),
                                ..Default::default()
                            }],
                            ..Default::default()
                        }],
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn segment_context_shares_ancestors_with_the_tree() {
        let config = AuditConfig::default();
        let interview = interview();
        let household = interview.household.as_ref().unwrap();
        let person = &household.members[0];
        let journey = &person.journeys[0];
        let trip = &journey.trips[0];
        let segment = &trip.segments[0];

        let root = build_interview_context(&interview, &config);
        let person_ctx = build_person_context(person, Some(household), None, &root);
        let journey_ctx = build_journey_context(journey, &person_ctx);
        let trip_ctx = build_trip_context(trip, &journey_ctx);
        let ctx = build_segment_context(segment, &trip_ctx);

        assert!(std::ptr::eq(ctx.segment, segment));
        assert!(std::ptr::eq(ctx.trip, trip));
        assert!(std::ptr::eq(ctx.journey, journey));
        assert!(std::ptr::eq(ctx.person, person));
        assert!(std::ptr::eq(ctx.household.unwrap(), household));
        assert!(std::ptr::eq(ctx.interview, &interview));
        assert!(std::ptr::eq(ctx.config, &config));
        assert!(ctx.home.is_none());
        assert_eq!(ctx.subject_uuid(), Some("seg"));
        assert_eq!(SegmentAuditContext::OBJECT_TYPE, ObjectType::Segment);
    }

    #[test]
    fn missing_household_propagates_as_none() {
        let config = AuditConfig::default();
        let interview = interview();
        let person = &interview.household.as_ref().unwrap().members[0];

        let root = build_interview_context(&interview, &config);
        let person_ctx = build_person_context(person, None, None, &root);
        let journey_ctx = build_journey_context(&person.journeys[0], &person_ctx);
        let trip_ctx = build_trip_context(&person.journeys[0].trips[0], &journey_ctx);

        assert!(trip_ctx.household.is_none());
        assert!(trip_ctx.home.is_none());
    }

    #[test]
    fn blank_uuid_has_no_subject() {
        let config = AuditConfig::default();
        let interview = Interview::default();
        let home = Home {
            uuid: Some(String::new()),
            ..Default::default()
        };
        let root = build_interview_context(&interview, &config);
        assert_eq!(build_home_context(&home, &root).subject_uuid(), None);
        assert_eq!(root.subject_uuid(), None);
    }
}
