use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Journey;
use crate::enums::ObjectType;
use crate::object::survey_object;

/// A household member.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub driving_license_owner: Option<bool>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub journeys: Vec<Journey>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(Person, ObjectType::Person, {
    "age" => age,
    "gender" => gender,
    "drivingLicenseOwner" => driving_license_owner,
    "occupation" => occupation,
    "journeys" => journeys,
});
