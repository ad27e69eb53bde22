//! Access-code format configuration.

use serde::{Deserialize, Serialize};

/// Name of the access-code validator to install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessCodeFormat {
    /// No validator; access codes are only checked for presence.
    #[default]
    None,
    /// Eight digits, optionally split `0000-0000`.
    EightDigits,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccessCodeConfig {
    #[serde(default)]
    pub format: AccessCodeFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Figment;
    use figment::providers::{Format, Toml};

    fn extract(toml: &str) -> Result<AccessCodeConfig, figment::Error> {
        Figment::from(Toml::string(toml)).extract()
    }

    #[test]
    fn format_names_are_snake_case() {
        assert_eq!(extract(r#"format = "eight_digits""#).unwrap().format, AccessCodeFormat::EightDigits);
        assert_eq!(extract("").unwrap().format, AccessCodeFormat::None);
        assert!(extract(r#"format = "base64""#).is_err());
    }
}
