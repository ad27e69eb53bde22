use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Trip, VisitedPlace};
use crate::enums::ObjectType;
use crate::object::survey_object;

/// One person's travel over a surveyed period (usually one day).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    #[serde(default)]
    pub uuid: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub visited_places: Vec<VisitedPlace>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(Journey, ObjectType::Journey, {
    "startDate" => start_date,
    "endDate" => end_date,
    "visitedPlaces" => visited_places,
    "trips" => trips,
});

impl Journey {
    /// Find a visited place of this journey by identifier.
    #[must_use]
    pub fn visited_place(&self, uuid: &str) -> Option<&VisitedPlace> {
        self.visited_places
            .iter()
            .find(|place| place.uuid.as_deref() == Some(uuid))
    }
}
