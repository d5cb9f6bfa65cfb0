//! Aggregated result of a timestamp estimation run

use super::{ResolvedDate, SkippedDependency, Timestamp};
use serde::{Deserialize, Serialize};

/// Dates collected over all dependencies of one binary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildTimeEstimate {
    /// Resolved dates, in input order
    pub dates: Vec<ResolvedDate>,
    /// Dependencies that produced no date, in input order
    pub skipped: Vec<SkippedDependency>,
}

impl BuildTimeEstimate {
    /// Creates an empty estimate
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a resolved date
    pub fn add_date(&mut self, resolved: ResolvedDate) {
        self.dates.push(resolved);
    }

    /// Records a skipped dependency
    pub fn add_skip(&mut self, skipped: SkippedDependency) {
        self.skipped.push(skipped);
    }

    /// Returns the latest resolved date: the earliest moment the binary
    /// could have been built. `None` when nothing was resolved.
    pub fn minimum_build_time(&self) -> Option<Timestamp> {
        self.dates.iter().map(|d| d.date).max()
    }

    /// Returns the dependency that determines the minimum build time
    pub fn latest_dependency(&self) -> Option<&ResolvedDate> {
        self.dates.iter().max_by_key(|d| d.date)
    }

    /// Returns the number of resolved dependencies
    pub fn resolved_count(&self) -> usize {
        self.dates.len()
    }

    /// Returns the number of skipped dependencies
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// Returns the total number of dependencies processed
    pub fn total_dependencies(&self) -> usize {
        self.resolved_count() + self.skip_count()
    }

    /// Returns true if no date could be resolved
    pub fn is_unresolved(&self) -> bool {
        self.dates.is_empty()
    }
}
