//! Audit engine error types.
//!
//! Data-quality problems are never errors: they are findings. A `CheckError`
//! means a check itself is broken and the audit run cannot be trusted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// A check could not evaluate its rule.
    #[error("Audit check failed: {0}")]
    Failed(String),

    /// Catch-all for errors raised from inside a check.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum TranslationError {
    /// A locale catalog is not valid TOML or has the wrong shape.
    #[error("Translation catalog '{locale}' is invalid: {source}")]
    Catalog {
        locale: String,
        #[source]
        source: toml::de::Error,
    },
}
