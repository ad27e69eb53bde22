//! Object types, audit levels, and survey answer enums.
//!
//! Wire names use `camelCase` to match the survey JSON documents.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ObjectType
// ---------------------------------------------------------------------------

/// Kind of entity a finding refers to. One per level of the interview tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    Interview,
    Household,
    Home,
    Person,
    Journey,
    VisitedPlace,
    Trip,
    Segment,
}

impl ObjectType {
    /// Every level, root first.
    pub const ALL: [Self; 8] = [
        Self::Interview,
        Self::Household,
        Self::Home,
        Self::Person,
        Self::Journey,
        Self::VisitedPlace,
        Self::Trip,
        Self::Segment,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interview => "interview",
            Self::Household => "household",
            Self::Home => "home",
            Self::Person => "person",
            Self::Journey => "journey",
            Self::VisitedPlace => "visitedPlace",
            Self::Trip => "trip",
            Self::Segment => "segment",
        }
    }

    /// Error-code prefix used by the check catalog for this level.
    ///
    /// A code such as `HM_M_Geography` belongs to the home level. This is a
    /// naming convention; nothing stops a registry from using other keys.
    #[must_use]
    pub const fn code_prefix(self) -> &'static str {
        match self {
            Self::Interview => "I_",
            Self::Household => "HH_",
            Self::Home => "HM_",
            Self::Person => "P_",
            Self::Journey => "J_",
            Self::VisitedPlace => "VP_",
            Self::Trip => "T_",
            Self::Segment => "S_",
        }
    }

    /// Level whose prefix starts `error_code`.
    #[must_use]
    pub fn from_error_code(error_code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|object_type| error_code.starts_with(object_type.code_prefix()))
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditLevel
// ---------------------------------------------------------------------------

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditLevel {
    Error,
    Warning,
}

impl AuditLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Transport mode declared for a trip segment.
///
/// Values the survey does not know deserialize to [`Mode::Unknown`] so that a
/// single bad answer does not reject the whole interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Walk,
    Bicycle,
    CarDriver,
    CarPassenger,
    TransitBus,
    TransitRail,
    Taxi,
    Other,
    #[serde(other)]
    Unknown,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bicycle => "bicycle",
            Self::CarDriver => "carDriver",
            Self::CarPassenger => "carPassenger",
            Self::TransitBus => "transitBus",
            Self::TransitRail => "transitRail",
            Self::Taxi => "taxi",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// Activity performed at a visited place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    Home,
    Work,
    School,
    Shopping,
    Leisure,
    Service,
    Other,
    #[serde(other)]
    Unknown,
}

impl Activity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::School => "school",
            Self::Shopping => "shopping",
            Self::Leisure => "leisure",
            Self::Service => "service",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
