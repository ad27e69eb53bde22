//! Cross-cutting error types.
//!
//! Check failures live in `svy-audits` (`CheckError`), configuration failures
//! in `svy-config`, territory loading failures in `svy-geo`.

use thiserror::Error;

/// Errors raised while handling an entity tree.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The JSON document is not a valid interview tree.
    #[error("Invalid interview tree: {0}")]
    Json(#[from] serde_json::Error),
}
