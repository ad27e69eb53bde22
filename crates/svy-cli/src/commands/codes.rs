use serde::Serialize;
use svy_audits::AuditRegistries;
use svy_core::enums::ObjectType;

use crate::cli::{GlobalFlags, Locale};
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeEntry {
    pub error_code: String,
    pub object_type: Option<ObjectType>,
    pub message: Option<String>,
}

/// Handle `svy codes`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let translations = super::translations()?;
    let locale = flags.locale.unwrap_or(Locale::En).as_str();

    let registries = AuditRegistries::baseline();
    let entries: Vec<CodeEntry> = registries
        .codes()
        .map(|code| CodeEntry {
            error_code: code.to_string(),
            object_type: ObjectType::from_error_code(code),
            message: translations.message(locale, code).map(str::to_string),
        })
        .collect();

    output(&entries, flags.format)
}
