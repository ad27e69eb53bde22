//! Per-locale messages for audit error codes.
//!
//! Catalogs are TOML files embedded at build time, one per supported locale,
//! with every message under an `[audits]` table keyed by error code. The
//! engine never reads them; presentation layers do.

use std::collections::BTreeMap;

use serde::Deserialize;
use svy_core::audit::AuditForObject;

use crate::error::TranslationError;

pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "fr"];

const EN: &str = include_str!("../locales/en.toml");
const FR: &str = include_str!("../locales/fr.toml");

#[derive(Deserialize)]
struct Catalog {
    #[serde(default)]
    audits: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct Translations {
    catalogs: BTreeMap<String, BTreeMap<String, String>>,
}

impl Translations {
    /// Catalogs shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError::Catalog` if an embedded catalog is malformed.
    pub fn builtin() -> Result<Self, TranslationError> {
        let mut translations = Self::default();
        translations.add_catalog("en", EN)?;
        translations.add_catalog("fr", FR)?;
        Ok(translations)
    }

    /// Add (or replace) the catalog of a locale from TOML source.
    ///
    /// # Errors
    ///
    /// Returns `TranslationError::Catalog` if `source` is not a valid catalog.
    pub fn add_catalog(&mut self, locale: &str, source: &str) -> Result<(), TranslationError> {
        let catalog: Catalog = toml::from_str(source).map_err(|source| TranslationError::Catalog {
            locale: locale.to_string(),
            source,
        })?;
        self.catalogs.insert(locale.to_string(), catalog.audits);
        Ok(())
    }

    #[must_use]
    pub fn message(&self, locale: &str, error_code: &str) -> Option<&str> {
        self.catalogs
            .get(locale)?
            .get(error_code)
            .map(String::as_str)
    }

    /// Error codes with a message in `locale`.
    pub fn keys(&self, locale: &str) -> impl Iterator<Item = &str> {
        self.catalogs
            .get(locale)
            .into_iter()
            .flat_map(|catalog| catalog.keys().map(String::as_str))
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    /// Copy of `audit` with its message replaced by the `locale` translation,
    /// or unchanged when there is none.
    #[must_use]
    pub fn localize(&self, locale: &str, audit: &AuditForObject) -> AuditForObject {
        let mut localized = audit.clone();
        if let Some(message) = self.message(locale, &audit.error_code) {
            localized.message = message.to_string();
        }
        localized
    }
}
