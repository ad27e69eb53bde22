//! Configuration injected into every audit context.
//!
//! Checks never reach for process-wide settings: everything they depend on
//! (survey period, required fields, territory, access-code validator) travels
//! in an [`AuditConfig`] referenced by the context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use svy_config::{AccessCodeFormat, PeriodConfig, SurveyConfig};
use svy_core::enums::ObjectType;
use svy_geo::SurveyTerritory;

/// Predicate deciding whether an access code is well formed.
#[derive(Clone)]
pub struct AccessCodeValidator(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl AccessCodeValidator {
    pub fn new(validate: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(validate))
    }

    #[must_use]
    pub fn is_valid(&self, access_code: &str) -> bool {
        (self.0)(access_code)
    }

    /// Eight ASCII digits, optionally split in two groups of four by a dash.
    #[must_use]
    pub fn eight_digits() -> Self {
        Self::new(|code| {
            let digits: Vec<char> = match code.split_once('-') {
                Some((head, tail)) if head.len() == 4 && tail.len() == 4 => {
                    head.chars().chain(tail.chars()).collect()
                }
                Some(_) => return false,
                None => code.chars().collect(),
            };
            digits.len() == 8 && digits.iter().all(char::is_ascii_digit)
        })
    }

    /// Validator for a configured format, `None` for [`AccessCodeFormat::None`].
    #[must_use]
    pub fn for_format(format: AccessCodeFormat) -> Option<Self> {
        match format {
            AccessCodeFormat::None => None,
            AccessCodeFormat::EightDigits => Some(Self::eight_digits()),
        }
    }
}

impl fmt::Debug for AccessCodeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCodeValidator(..)")
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    pub period: PeriodConfig,
    /// Object type name to required attributes.
    pub required_fields: BTreeMap<String, Vec<String>>,
    /// Resolved survey territory; `None` disables territory checks.
    pub territory: Option<Arc<SurveyTerritory>>,
    /// `None` disables access-code format checks.
    pub access_code_validator: Option<AccessCodeValidator>,
}

impl AuditConfig {
    /// Build the audit configuration from loaded survey settings.
    ///
    /// Resolves the survey territory through the process-wide cache, so the
    /// first call decides the territory for the rest of the process.
    #[must_use]
    pub fn from_survey_config(config: &SurveyConfig) -> Self {
        let territory_path = config.territory.path();
        Self {
            period: config.period.clone(),
            required_fields: config.required_fields.clone(),
            territory: svy_geo::survey_territory(territory_path.as_deref()),
            access_code_validator: AccessCodeValidator::for_format(config.access_code.format),
        }
    }

    #[must_use]
    pub fn with_period(mut self, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        self.period = PeriodConfig {
            start_date: start_date.into(),
            end_date: end_date.into(),
        };
        self
    }

    #[must_use]
    pub fn with_required_fields<I, S>(mut self, object_type: ObjectType, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields.insert(
            object_type.as_str().to_string(),
            fields.into_iter().map(Into::into).collect(),
        );
        self
    }

    #[must_use]
    pub fn with_territory(mut self, territory: SurveyTerritory) -> Self {
        self.territory = Some(Arc::new(territory));
        self
    }

    #[must_use]
    pub fn with_access_code_validator(mut self, validator: AccessCodeValidator) -> Self {
        self.access_code_validator = Some(validator);
        self
    }

    #[must_use]
    pub fn survey_start(&self) -> Option<DateTime<FixedOffset>> {
        self.period.start_instant()
    }

    #[must_use]
    pub fn survey_end(&self) -> Option<DateTime<FixedOffset>> {
        self.period.end_instant()
    }

    #[must_use]
    pub fn required_fields(&self, object_type: ObjectType) -> &[String] {
        self.required_fields
            .get(object_type.as_str())
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn territory(&self) -> Option<&SurveyTerritory> {
        self.territory.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_digit_codes() {
        let validator = AccessCodeValidator::eight_digits();
        assert!(validator.is_valid("12345678"));
        assert!(validator.is_valid("1234-5678"));
        assert!(!validator.is_valid("1234567"));
        assert!(!validator.is_valid("123-45678"));
        assert!(!validator.is_valid("abcd-efgh"));
        assert!(!validator.is_valid("1234-5678-9"));
    }

    #[test]
    fn no_validator_for_none_format() {
        assert!(AccessCodeValidator::for_format(AccessCodeFormat::None).is_none());
        assert!(AccessCodeValidator::for_format(AccessCodeFormat::EightDigits).is_some());
    }

    #[test]
    fn required_fields_by_object_type() {
        let config = AuditConfig::default()
            .with_required_fields(ObjectType::VisitedPlace, ["activity", "name"]);
        assert_eq!(config.required_fields(ObjectType::VisitedPlace), ["activity", "name"]);
        assert!(config.required_fields(ObjectType::Trip).is_empty());
    }

    #[test]
    fn unparsable_period_is_unset() {
        let config = AuditConfig::default().with_period("yesterday", "");
        assert_eq!(config.survey_start(), None);
        assert_eq!(config.survey_end(), None);
    }
}
