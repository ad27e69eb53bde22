//! Shared fixtures for svy-audits integration tests.

#![allow(dead_code)]

use svy_core::audit::AuditForObject;
use svy_core::entities::{Home, Household, Interview, Journey, Person, Segment, Trip, VisitedPlace};
use svy_core::enums::{Activity, Mode};
use svy_core::geometry::{Geography, Point};
use svy_geo::EARTH_RADIUS_METERS;

pub const HOME: Point = Point { lon: -73.6, lat: 45.5 };
pub const WORK: Point = Point { lon: -73.57, lat: 45.51 };

/// `meters` due north of `origin`.
pub fn north_of(origin: Point, meters: f64) -> Point {
    Point::new(origin.lon, origin.lat + (meters / EARTH_RADIUS_METERS).to_degrees())
}

pub fn feature(point: Point) -> Geography {
    Geography::point(point.lon, point.lat)
}

/// An interview on which the baseline catalog reports nothing under the
/// default configuration.
pub fn clean_interview() -> Interview {
    Interview {
        id: 1,
        uuid: Some("itv-1".into()),
        access_code: Some("1234-5678".into()),
        started_at: Some(1_759_320_000.0),
        languages: vec!["fr".into()],
        home: Some(Home {
            uuid: Some("home-1".into()),
            geography: Some(feature(HOME)),
            ..Default::default()
        }),
        household: Some(Household {
            uuid: Some("hh-1".into()),
            size: Some(1),
            members: vec![Person {
                uuid: Some("per-1".into()),
                age: Some(34),
                driving_license_owner: Some(true),
                journeys: vec![Journey {
                    uuid: Some("jo-1".into()),
                    start_date: Some("2025-10-01".into()),
                    end_date: Some("2025-10-01".into()),
                    visited_places: vec![
                        VisitedPlace {
                            uuid: Some("vp-home".into()),
                            activity: Some(Activity::Home),
                            geography: Some(feature(HOME)),
                            ..Default::default()
                        },
                        VisitedPlace {
                            uuid: Some("vp-work".into()),
                            activity: Some(Activity::Work),
                            geography: Some(feature(WORK)),
                            ..Default::default()
                        },
                    ],
                    trips: vec![Trip {
                        uuid: Some("tr-1".into()),
                        origin_visited_place_uuid: Some("vp-home".into()),
                        destination_visited_place_uuid: Some("vp-work".into()),
                        segments: vec![Segment {
                            uuid: Some("seg-1".into()),
                            mode: Some(Mode::CarDriver),
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

pub fn person_mut(interview: &mut Interview) -> &mut Person {
    &mut interview.household.as_mut().expect("household").members[0]
}

pub fn journey_mut(interview: &mut Interview) -> &mut Journey {
    &mut person_mut(interview).journeys[0]
}

pub fn home_mut(interview: &mut Interview) -> &mut Home {
    interview.home.as_mut().expect("home")
}

/// Error codes of `audits`, sorted.
pub fn codes(audits: &[AuditForObject]) -> Vec<&str> {
    let mut codes: Vec<&str> = audits.iter().map(|a| a.error_code.as_str()).collect();
    codes.sort_unstable();
    codes
}
