use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{Mode, ObjectType};
use crate::object::survey_object;

/// A single-mode leg of a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(Segment, ObjectType::Segment, {
    "mode" => mode,
});
