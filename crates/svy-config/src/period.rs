//! Survey period bounds.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Start and end of the survey fieldwork, as RFC 3339 strings with an
/// explicit offset (e.g. `2025-12-31T23:59:59-05:00`).
///
/// Bounds are kept as strings: an unparsable bound means "not configured",
/// which is decided where the bound is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PeriodConfig {
    #[serde(default)]
    pub start_date: String,

    #[serde(default)]
    pub end_date: String,
}

impl PeriodConfig {
    /// Parsed start bound, or `None` when blank or unparsable.
    #[must_use]
    pub fn start_instant(&self) -> Option<DateTime<FixedOffset>> {
        parse_bound(&self.start_date)
    }

    /// Parsed end bound, or `None` when blank or unparsable.
    #[must_use]
    pub fn end_instant(&self) -> Option<DateTime<FixedOffset>> {
        parse_bound(&self.end_date)
    }

    /// Whether at least one bound parses.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.start_instant().is_some() || self.end_instant().is_some()
    }
}

/// Parse an RFC 3339 instant. Blank or malformed input yields `None`.
#[must_use]
pub fn parse_bound(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw).ok()
}
