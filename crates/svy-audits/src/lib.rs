//! # svy-audits
//!
//! Hierarchical audit engine for survey interviews.
//!
//! An interview tree is audited level by level. For each entity the caller
//! builds a context (the entity plus borrowed references to its ancestors and
//! the injected [`AuditConfig`]) and hands it, together with a
//! [`CheckRegistry`] for that level, to the matching runner. Runners await
//! every check in the registry and collect the findings; the first check that
//! fails aborts the run with its error.
//!
//! - [`context`]: per-level contexts and their builders
//! - [`check`]: the check protocol, registries, and registry merging
//! - [`runner`]: the generic runner and its eight per-level entry points
//! - [`checks`]: the baseline catalog, one module per level
//! - [`walker`]: top-down traversal of a whole interview
//! - [`translations`]: per-locale messages for every error code

pub mod check;
pub mod checks;
pub mod config;
pub mod context;
mod error;
pub mod runner;
pub mod translations;
pub mod walker;

pub use check::{AuditCheck, CheckOutcome, CheckRegistry, CheckResult, merge_registries};
pub use config::{AccessCodeValidator, AuditConfig};
pub use error::{CheckError, TranslationError};
pub use walker::{AuditRegistries, audit_interview};
