//! The finding record produced by audit checks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditLevel, ObjectType};

/// One data-quality finding about one entity of an interview.
///
/// `error_code` is the catalog key the finding was produced under and is
/// unique across all levels. `ignore` is a reviewer-controlled suppression
/// flag and is always `false` when the finding is produced.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AuditForObject {
    pub object_type: ObjectType,
    pub object_uuid: String,
    pub error_code: String,
    pub version: u32,
    pub level: AuditLevel,
    pub message: String,
    #[serde(default)]
    pub ignore: bool,
}
