//! Check protocol and registries.
//!
//! A check inspects one context and reports at most one [`CheckOutcome`]. It
//! may be a plain function or return a future; the runner awaits both the
//! same way. `Ok(None)` is the only "no issue" answer. `Err` means the check
//! itself is broken and aborts the run.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use svy_core::enums::AuditLevel;

use crate::error::CheckError;

/// Current version of every baseline check.
pub const CHECK_VERSION: u32 = 1;

/// What a check reports. The runner adds the object type, object uuid, and
/// error code when turning it into a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub version: u32,
    pub level: AuditLevel,
    pub message: String,
}

impl CheckOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            version: CHECK_VERSION,
            level: AuditLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            version: CHECK_VERSION,
            level: AuditLevel::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }
}

pub type CheckResult = Result<Option<CheckOutcome>, CheckError>;

/// Boxed asynchronous check.
pub type AsyncCheckFn<C> = dyn for<'c> Fn(&'c C) -> BoxFuture<'c, CheckResult> + Send + Sync;

/// One rule, scoped to one context type.
pub enum AuditCheck<C> {
    Sync(fn(&C) -> CheckResult),
    Async(Arc<AsyncCheckFn<C>>),
}

impl<C> AuditCheck<C> {
    pub const fn sync(check: fn(&C) -> CheckResult) -> Self {
        Self::Sync(check)
    }

    pub fn from_async<F>(check: F) -> Self
    where
        F: for<'c> Fn(&'c C) -> BoxFuture<'c, CheckResult> + Send + Sync + 'static,
    {
        Self::Async(Arc::new(check))
    }

    /// Evaluate the check. Synchronous checks resolve immediately.
    ///
    /// # Errors
    ///
    /// Returns whatever error the check itself returns.
    pub async fn run(&self, context: &C) -> CheckResult {
        match self {
            Self::Sync(check) => check(context),
            Self::Async(check) => check(context).await,
        }
    }
}

impl<C> Clone for AuditCheck<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Sync(check) => Self::Sync(*check),
            Self::Async(check) => Self::Async(Arc::clone(check)),
        }
    }
}

impl<C> fmt::Debug for AuditCheck<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("AuditCheck::Sync"),
            Self::Async(_) => f.write_str("AuditCheck::Async"),
        }
    }
}

/// Checks for one context type, keyed by error code.
///
/// Iteration order is stable (sorted by error code) but carries no meaning.
pub struct CheckRegistry<C> {
    checks: BTreeMap<String, AuditCheck<C>>,
}

impl<C> CheckRegistry<C> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            checks: BTreeMap::new(),
        }
    }

    /// Add a check, replacing any check already registered under `code`.
    #[must_use]
    pub fn with(mut self, code: impl Into<String>, check: AuditCheck<C>) -> Self {
        self.insert(code, check);
        self
    }

    /// Register a check and return the one it replaced.
    pub fn insert(&mut self, code: impl Into<String>, check: AuditCheck<C>) -> Option<AuditCheck<C>> {
        self.checks.insert(code.into(), check)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.checks.contains_key(code)
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&AuditCheck<C>> {
        self.checks.get(code)
    }

    /// Registered error codes, in iteration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AuditCheck<C>)> {
        self.checks.iter().map(|(code, check)| (code.as_str(), check))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<C> Default for CheckRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for CheckRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            checks: self.checks.clone(),
        }
    }
}

impl<C> fmt::Debug for CheckRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.codes()).finish()
    }
}

impl<C, S: Into<String>> FromIterator<(S, AuditCheck<C>)> for CheckRegistry<C> {
    fn from_iter<I: IntoIterator<Item = (S, AuditCheck<C>)>>(iter: I) -> Self {
        Self {
            checks: iter
                .into_iter()
                .map(|(code, check)| (code.into(), check))
                .collect(),
        }
    }
}

impl<C> IntoIterator for CheckRegistry<C> {
    type Item = (String, AuditCheck<C>);
    type IntoIter = btree_map::IntoIter<String, AuditCheck<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.into_iter()
    }
}

/// Combine a baseline catalog with a project extension.
///
/// Extension checks are added; on an error-code clash the extension wins.
#[must_use]
pub fn merge_registries<C>(baseline: CheckRegistry<C>, extension: CheckRegistry<C>) -> CheckRegistry<C> {
    let mut merged = baseline;
    for (code, check) in extension {
        if merged.insert(code.as_str(), check).is_some() {
            tracing::debug!(%code, "extension check overrides baseline check");
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    struct Ctx(u32);

    fn never(_: &Ctx) -> CheckResult {
        Ok(None)
    }

    fn odd(ctx: &Ctx) -> CheckResult {
        Ok((ctx.0 % 2 == 1).then(|| CheckOutcome::warning("odd")))
    }

    fn big<'c>(ctx: &'c Ctx) -> BoxFuture<'c, CheckResult> {
        async move { Ok((ctx.0 > 10).then(|| CheckOutcome::error("big"))) }.boxed()
    }

    #[test]
    fn merge_adds_and_overrides() {
        let baseline = CheckRegistry::new()
            .with("A", AuditCheck::sync(never))
            .with("B", AuditCheck::sync(never));
        let extension = CheckRegistry::new()
            .with("B", AuditCheck::from_async(big))
            .with("C", AuditCheck::sync(odd));

        let merged = merge_registries(baseline, extension);
        assert_eq!(merged.codes().collect::<Vec<_>>(), ["A", "B", "C"]);
        assert!(matches!(merged.get("B"), Some(AuditCheck::Async(_))));
    }

    #[test]
    fn merge_with_empty_extension_keeps_baseline() {
        let baseline = CheckRegistry::new().with("A", AuditCheck::sync(odd));
        let merged = merge_registries(baseline, CheckRegistry::new());
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn sync_and_async_checks_run_uniformly() {
        let sync = AuditCheck::sync(odd);
        let async_check = AuditCheck::from_async(big);

        let outcome = sync.run(&Ctx(3)).now_or_never().unwrap().unwrap();
        assert_eq!(outcome, Some(CheckOutcome::warning("odd")));

        let outcome = futures::executor::block_on(async_check.run(&Ctx(11))).unwrap();
        assert_eq!(outcome.map(|o| o.level), Some(AuditLevel::Error));
        let outcome = futures::executor::block_on(async_check.run(&Ctx(1))).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn outcome_constructors() {
        let outcome = CheckOutcome::error("boom").with_version(3);
        assert_eq!(outcome.level, AuditLevel::Error);
        assert_eq!(outcome.version, 3);
        assert_eq!(CheckOutcome::warning("w").version, CHECK_VERSION);
    }

    #[test]
    fn registry_from_iterator_and_debug() {
        let registry: CheckRegistry<Ctx> = [("Z", AuditCheck::sync(never)), ("Y", AuditCheck::sync(odd))]
            .into_iter()
            .collect();
        assert_eq!(format!("{registry:?}"), r#"{"Y", "Z"}"#);
        assert!(registry.contains("Z"));
    }
}
