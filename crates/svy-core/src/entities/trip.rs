use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Segment;
use crate::enums::ObjectType;
use crate::object::survey_object;

/// A movement between two visited places of the same journey.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub origin_visited_place_uuid: Option<String>,
    #[serde(default)]
    pub destination_visited_place_uuid: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(Trip, ObjectType::Trip, {
    "originVisitedPlaceUuid" => origin_visited_place_uuid,
    "destinationVisitedPlaceUuid" => destination_visited_place_uuid,
    "segments" => segments,
});
