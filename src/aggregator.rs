//! Vendor date aggregation
//!
//! This module coordinates the whole resolution workflow:
//! classify -> decode locally or look up on the forge -> collect -> maximum.
//!
//! Records are handled strictly one at a time, in input order. A record
//! whose date cannot be resolved is skipped with a diagnostic. A record
//! that carries no version at all aborts the batch: it means the
//! extraction itself cannot be trusted for this binary.

use crate::domain::{BuildTimeEstimate, DateSource, DependencyRecord, ResolvedDate, SkippedDependency};
use crate::error::{AggregateError, ResolveError};
use crate::progress::ResolveProgress;
use crate::resolver::ReleaseDateResolver;
use crate::version::{classify, decode, VersionDescriptor};
use tracing::{debug, warn};

/// Orchestrates date resolution over the dependency list of a binary
pub struct VendorDateAggregator {
    /// Forge lookups for tagged releases
    resolver: ReleaseDateResolver,
    /// Whether to draw a progress bar
    show_progress: bool,
}

impl VendorDateAggregator {
    /// Create a new aggregator
    pub fn new(resolver: ReleaseDateResolver) -> Self {
        Self {
            resolver,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Resolve a date for every record that allows it
    pub async fn aggregate(
        &self,
        records: &[DependencyRecord],
    ) -> Result<BuildTimeEstimate, AggregateError> {
        let mut progress = ResolveProgress::new(records.len() as u64, self.show_progress);
        let mut estimate = BuildTimeEstimate::new();

        for record in records {
            progress.begin(record);

            let descriptor = match classify(&record.versioned_path) {
                Ok(descriptor) => descriptor,
                Err(source) => {
                    progress.finish();
                    return Err(AggregateError::VersionExtractionFailed {
                        package: record.package_identity.clone(),
                        source,
                    });
                }
            };

            match self.resolve_record(record, &descriptor).await {
                Ok(resolved) => {
                    debug!(
                        package = %resolved.package_identity,
                        version = %resolved.version,
                        source = %resolved.source,
                        date = %resolved.date,
                        "resolved"
                    );
                    estimate.add_date(resolved);
                    progress.resolved();
                }
                Err(e) => {
                    progress.suspend(|| {
                        warn!(
                            package = %record.package_identity,
                            version = %descriptor,
                            "skipping dependency: {}",
                            e
                        )
                    });
                    estimate.add_skip(SkippedDependency::new(
                        &record.package_identity,
                        descriptor.to_string(),
                        e.to_string(),
                    ));
                    progress.skipped();
                }
            }
        }

        progress.finish();
        Ok(estimate)
    }

    /// Resolve a single classified record
    async fn resolve_record(
        &self,
        record: &DependencyRecord,
        descriptor: &VersionDescriptor,
    ) -> Result<ResolvedDate, ResolveError> {
        let package = record.package_identity.as_str();
        let version = descriptor.to_string();

        match descriptor {
            VersionDescriptor::PseudoVersion(raw) => {
                let date = decode(raw)?;
                Ok(ResolvedDate::new(package, version, date, DateSource::PseudoVersion))
            }
            VersionDescriptor::Semantic(tag) | VersionDescriptor::IncompatibleSemantic(tag)
                if self.resolver.is_forge_hosted(package) =>
            {
                let date = self.resolver.resolve(package, tag).await?;
                Ok(ResolvedDate::new(package, version, date, DateSource::ForgeTag))
            }
            VersionDescriptor::Semantic(tag) | VersionDescriptor::IncompatibleSemantic(tag) => {
                let date = decode(tag)?;
                Ok(ResolvedDate::new(package, version, date, DateSource::EmbeddedDate))
            }
        }
    }
}
