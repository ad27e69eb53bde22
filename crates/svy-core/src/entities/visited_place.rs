use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{Activity, ObjectType};
use crate::geometry::Geography;
use crate::object::survey_object;

/// A place visited during a journey.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisitedPlace {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub activity: Option<Activity>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub geography: Option<Geography>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(VisitedPlace, ObjectType::VisitedPlace, {
    "activity" => activity,
    "name" => name,
    "geography" => geography,
});
