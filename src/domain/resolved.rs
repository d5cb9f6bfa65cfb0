//! Per-dependency resolution outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar instant, always in UTC
pub type Timestamp = DateTime<Utc>;

/// How a dependency's date was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    /// Decoded from a `v0.0.0-<timestamp>-<commit>` pseudo-version
    PseudoVersion,
    /// Committer date of the commit behind a forge tag
    ForgeTag,
    /// Date segment found in a version of a module not hosted on the forge
    EmbeddedDate,
}

impl DateSource {
    /// Returns a short label for display
    pub fn label(&self) -> &'static str {
        match self {
            DateSource::PseudoVersion => "pseudo-version",
            DateSource::ForgeTag => "tag",
            DateSource::EmbeddedDate => "embedded date",
        }
    }
}

impl fmt::Display for DateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A dependency whose version was mapped to a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDate {
    /// Module path
    pub package_identity: String,
    /// Version the date was resolved for
    pub version: String,
    /// Release or commit date
    pub date: Timestamp,
    /// How the date was obtained
    pub source: DateSource,
}

impl ResolvedDate {
    /// Creates a new ResolvedDate
    pub fn new(
        package_identity: impl Into<String>,
        version: impl Into<String>,
        date: Timestamp,
        source: DateSource,
    ) -> Self {
        Self {
            package_identity: package_identity.into(),
            version: version.into(),
            date,
            source,
        }
    }
}

/// A dependency that produced no date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDependency {
    /// Module path
    pub package_identity: String,
    /// Version that could not be resolved
    pub version: String,
    /// Why no date was produced
    pub reason: String,
}

impl SkippedDependency {
    /// Creates a new SkippedDependency
    pub fn new(
        package_identity: impl Into<String>,
        version: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            package_identity: package_identity.into(),
            version: version.into(),
            reason: reason.into(),
        }
    }
}
