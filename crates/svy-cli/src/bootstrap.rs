use std::path::Path;

use anyhow::Context;
use svy_config::SurveyConfig;

use crate::cli::GlobalFlags;

/// Load the survey configuration, honouring `--config` and a local `.env`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SurveyConfig> {
    load_dotenv()?;

    let Some(path) = flags.config.as_deref() else {
        return SurveyConfig::load().map_err(anyhow::Error::from);
    };
    if !path.is_file() {
        anyhow::bail!("config file '{}' does not exist", path.display());
    }
    SurveyConfig::load_from(path)
        .with_context(|| format!("failed to load config file at {}", path.display()))
}

fn load_dotenv() -> anyhow::Result<()> {
    let env_path = Path::new(".env");
    if env_path.exists() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
