//! # svy-config
//!
//! Layered survey configuration for the audit engine, loaded with figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SVY_*` prefix, `__` as separator)
//! 2. Project-level `.survey/config.toml`
//! 3. User-level `~/.config/survey-audits/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SVY_PERIOD__START_DATE` -> `period.start_date`,
//! `SVY_TERRITORY__GEOJSON_PATH` -> `territory.geojson_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use svy_config::SurveyConfig;
//!
//! let config = SurveyConfig::load_with_dotenv().expect("config");
//!
//! if let Some(end) = config.period.end_instant() {
//!     println!("fieldwork ends at {end}");
//! }
//! ```

mod access_code;
mod error;
mod period;
mod territory;

pub use access_code::{AccessCodeConfig, AccessCodeFormat};
pub use error::ConfigError;
pub use period::{PeriodConfig, parse_bound};
pub use territory::TerritoryConfig;

use std::collections::BTreeMap;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub period: PeriodConfig,
    /// Object type name (`interview`, `visitedPlace`, ...) to the attributes
    /// that must be answered for that object.
    #[serde(default)]
    pub required_fields: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub territory: TerritoryConfig,
    #[serde(default)]
    pub access_code: AccessCodeConfig,
}

impl SurveyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an explicit project file in place of
    /// `.survey/config.toml`.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::base_figment()
            .merge(Toml::file(path.into()))
            .merge(Env::prefixed("SVY_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Self::base_figment();

        let local_path = PathBuf::from(".survey/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SVY_").split("__"))
    }

    /// Defaults plus the user-global file.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("survey-audits").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SurveyConfig::default();
        assert!(!config.period.is_configured());
        assert!(!config.territory.is_configured());
        assert!(config.required_fields.is_empty());
        assert_eq!(config.access_code.format, AccessCodeFormat::None);
    }
}
