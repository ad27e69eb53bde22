use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Person;
use crate::enums::ObjectType;
use crate::object::survey_object;

/// The people living at the respondent's home.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    #[serde(default)]
    pub uuid: Option<String>,
    /// Declared number of members.
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub car_number: Option<i64>,
    #[serde(default)]
    pub members: Vec<Person>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(Household, ObjectType::Household, {
    "size" => size,
    "carNumber" => car_number,
    "members" => members,
});
