use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use svy_audits::{AuditConfig, AuditRegistries, audit_interview};
use svy_core::audit::AuditForObject;
use svy_core::entities::Interview;

use crate::bootstrap;
use crate::cli::{AuditArgs, GlobalFlags};
use crate::output::output;

/// One finding, tagged with the file it came from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFinding {
    pub file: String,
    #[serde(flatten)]
    pub audit: AuditForObject,
}

/// Handle `svy audit`.
pub async fn handle(args: &AuditArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut survey_config = bootstrap::load_config(flags)?;
    if let Some(format) = args.access_code_format {
        survey_config.access_code.format = format.into();
    }

    let config = AuditConfig::from_survey_config(&survey_config);

    let translations = super::translations()?;

    let mut findings = Vec::new();
    for path in &args.files {
        let audits = audit_file(path, &config).await?;
        tracing::info!(file = %path.display(), audits = audits.len(), "interview audited");

        findings.extend(audits.into_iter().map(|audit| FileFinding {
            file: path.display().to_string(),
            audit: match flags.locale {
                Some(locale) => translations.localize(locale.as_str(), &audit),
                None => audit,
            },
        }));
    }

    output(&findings, flags.format)
}

async fn audit_file(path: &Path, config: &AuditConfig) -> anyhow::Result<Vec<AuditForObject>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read interview file {}", path.display()))?;
    let interview = Interview::from_json(&json)
        .with_context(|| format!("failed to parse interview file {}", path.display()))?;

    let registries = AuditRegistries::baseline();
    audit_interview(&interview, config, &registries)
        .await
        .with_context(|| format!("audit checks failed for {}", path.display()))
}
