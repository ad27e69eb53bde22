use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::ObjectType;
use crate::geometry::Geography;
use crate::object::survey_object;

/// The respondent household's dwelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Location confirmed by the respondent.
    #[serde(default)]
    pub geography: Option<Geography>,
    /// Location known before the interview (sample frame, geocoded address).
    #[serde(default)]
    pub pre_geography: Option<Geography>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(Home, ObjectType::Home, {
    "address" => address,
    "postalCode" => postal_code,
    "geography" => geography,
    "preGeography" => pre_geography,
});
