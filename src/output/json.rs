//! JSON output formatter for machine processing

use crate::domain::{BuildTimeEstimate, DateSource, Timestamp};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput {
    /// Analyzed binary
    binary: String,
    /// Latest dependency date, `null` when nothing was resolved
    minimum_build_time: Option<Timestamp>,
    /// Summary statistics
    summary: JsonSummary,
    /// Per-dependency dates
    dependencies: Vec<JsonDependency>,
    /// Skipped dependencies (only in verbose mode)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<JsonSkip>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Number of dependencies with a date
    resolved: usize,
    /// Number of dependencies without a date
    skipped: usize,
}

/// JSON representation of a resolved dependency
#[derive(Serialize)]
struct JsonDependency {
    /// Module path
    name: String,
    /// Version string
    version: String,
    /// Resolved date
    date: Timestamp,
    /// How the date was obtained
    source: DateSource,
}

/// JSON representation of a skip
#[derive(Serialize)]
struct JsonSkip {
    /// Module path
    name: String,
    /// Version string
    version: String,
    /// Skip reason
    reason: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(
        &self,
        binary: &Path,
        estimate: &BuildTimeEstimate,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let dependencies = if self.verbosity == Verbosity::Quiet {
            Vec::new()
        } else {
            estimate
                .dates
                .iter()
                .map(|d| JsonDependency {
                    name: d.package_identity.clone(),
                    version: d.version.clone(),
                    date: d.date,
                    source: d.source,
                })
                .collect()
        };

        let skipped = if self.verbosity == Verbosity::Verbose {
            estimate
                .skipped
                .iter()
                .map(|s| JsonSkip {
                    name: s.package_identity.clone(),
                    version: s.version.clone(),
                    reason: s.reason.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let output = JsonOutput {
            binary: binary.display().to_string(),
            minimum_build_time: estimate.minimum_build_time(),
            summary: JsonSummary {
                resolved: estimate.resolved_count(),
                skipped: estimate.skip_count(),
            },
            dependencies,
            skipped,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
