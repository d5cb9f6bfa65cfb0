//! Core domain models for gostamp
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency records extracted from a binary
//! - Resolved dates and skipped dependencies
//! - The aggregated build time estimate

mod dependency;
mod resolved;
mod summary;

pub use dependency::DependencyRecord;
pub use resolved::{DateSource, ResolvedDate, SkippedDependency, Timestamp};
pub use summary::BuildTimeEstimate;
