use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Home, Household};
use crate::enums::ObjectType;
use crate::errors::CoreError;
use crate::object::survey_object;

/// Root survey response for one respondent household.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: i64,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub access_code: Option<String>,
    /// Start of the interview, in seconds since the Unix epoch.
    #[serde(default)]
    pub started_at: Option<f64>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub home: Option<Home>,
    #[serde(default)]
    pub household: Option<Household>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

survey_object!(Interview, ObjectType::Interview, {
    "accessCode" => access_code,
    "startedAt" => started_at,
    "languages" => languages,
    "contactEmail" => contact_email,
    "isCompleted" => is_completed,
    "home" => home,
    "household" => household,
});

impl Interview {
    /// Parse an interview tree from its JSON document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Json` if the document is not a valid tree.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
