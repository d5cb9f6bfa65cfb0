//! Text output formatter for human-readable display
//!
//! One `<package> <date>` line per resolved dependency, in input order,
//! followed by the estimated minimum build timestamp.

use crate::domain::{BuildTimeEstimate, ResolvedDate, SkippedDependency, Timestamp};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Label of the final line
const ESTIMATE_LABEL: &str = "Approximate (minimum) timestamp";

/// Reported when no dependency could be dated
pub const UNRESOLVED_MESSAGE: &str = "no dates could be resolved";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Format a single resolved dependency line
    fn format_resolved_line(
        &self,
        resolved: &ResolvedDate,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let source = if self.verbosity == Verbosity::Verbose {
            format!(" ({} {})", resolved.version, resolved.source)
        } else {
            String::new()
        };

        if self.color {
            writeln!(
                writer,
                "{} {}{}",
                resolved.package_identity,
                resolved.date.to_string().cyan(),
                source.dimmed()
            )
        } else {
            writeln!(
                writer,
                "{} {}{}",
                resolved.package_identity, resolved.date, source
            )
        }
    }

    /// Format a single skipped dependency line
    fn format_skip_line(
        &self,
        skipped: &SkippedDependency,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let line = format!(
            "  {} {} ({})",
            skipped.package_identity, skipped.version, skipped.reason
        );
        if self.color {
            writeln!(writer, "{}", line.dimmed())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Format the final estimate line
    fn format_estimate_line(
        &self,
        estimate: Option<Timestamp>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        match (estimate, self.color) {
            (Some(date), true) => writeln!(
                writer,
                "{} = {}",
                ESTIMATE_LABEL.bold(),
                date.to_string().green().bold()
            ),
            (Some(date), false) => writeln!(writer, "{} = {}", ESTIMATE_LABEL, date),
            (None, true) => writeln!(
                writer,
                "{}: {}",
                ESTIMATE_LABEL.bold(),
                UNRESOLVED_MESSAGE.yellow()
            ),
            (None, false) => writeln!(writer, "{}: {}", ESTIMATE_LABEL, UNRESOLVED_MESSAGE),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(
        &self,
        binary: &Path,
        estimate: &BuildTimeEstimate,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            if self.verbosity == Verbosity::Verbose {
                writeln!(writer, "{}", binary.display())?;
                writeln!(
                    writer,
                    "Resolved {} of {} dependencies",
                    estimate.resolved_count(),
                    estimate.total_dependencies()
                )?;
            }

            for resolved in &estimate.dates {
                self.format_resolved_line(resolved, writer)?;
            }

            if self.verbosity == Verbosity::Verbose && !estimate.skipped.is_empty() {
                writeln!(writer)?;
                writeln!(writer, "Skipped ({}):", estimate.skip_count())?;
                for skipped in &estimate.skipped {
                    self.format_skip_line(skipped, writer)?;
                }
            }

            writeln!(writer)?;
        }

        self.format_estimate_line(estimate.minimum_build_time(), writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateSource;
    use chrono::{TimeZone, Utc};

    fn sample_estimate() -> BuildTimeEstimate {
        let mut estimate = BuildTimeEstimate::new();
        estimate.add_date(ResolvedDate::new(
            "github.com/pkg/errors",
            "v0.9.1",
            Utc.with_ymd_and_hms(2020, 1, 15, 10, 0, 0).unwrap(),
            DateSource::ForgeTag,
        ));
        estimate.add_date(ResolvedDate::new(
            "golang.org/x/sys",
            "v0.0.0-20190227000051-27936f6d90f9",
            Utc.with_ymd_and_hms(2019, 2, 27, 0, 0, 0).unwrap(),
            DateSource::PseudoVersion,
        ));
        estimate.add_skip(SkippedDependency::new(
            "github.com/other/lib",
            "v1.0.0",
            "tag 'v1.0.0' not found in other/lib",
        ));
        estimate
    }

    fn render(verbosity: Verbosity, estimate: &BuildTimeEstimate) -> String {
        let formatter = TextFormatter::with_color(verbosity, false);
        let mut buf = Vec::new();
        formatter
            .format(Path::new("./server"), estimate, &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_normal() {
        let output = render(Verbosity::Normal, &sample_estimate());
        assert_eq!(
            output,
            "github.com/pkg/errors 2020-01-15 10:00:00 UTC\n\
             golang.org/x/sys 2019-02-27 00:00:00 UTC\n\
             \n\
             Approximate (minimum) timestamp = 2020-01-15 10:00:00 UTC\n"
        );
    }

    #[test]
    fn test_format_quiet_prints_only_estimate() {
        let output = render(Verbosity::Quiet, &sample_estimate());
        assert_eq!(
            output,
            "Approximate (minimum) timestamp = 2020-01-15 10:00:00 UTC\n"
        );
    }

    #[test]
    fn test_format_verbose_lists_sources_and_skips() {
        let output = render(Verbosity::Verbose, &sample_estimate());
        assert!(output.starts_with("./server\nResolved 2 of 3 dependencies\n"));
        assert!(output.contains("github.com/pkg/errors 2020-01-15 10:00:00 UTC (v0.9.1 tag)"));
        assert!(output.contains("Skipped (1):"));
        assert!(output.contains("github.com/other/lib v1.0.0 (tag 'v1.0.0' not found"));
    }

    #[test]
    fn test_format_unresolved() {
        let output = render(Verbosity::Normal, &BuildTimeEstimate::new());
        assert_eq!(
            output,
            "\nApproximate (minimum) timestamp: no dates could be resolved\n"
        );
    }

    #[test]
    fn test_format_with_color_keeps_content() {
        colored::control::set_override(true);
        let formatter = TextFormatter::new(Verbosity::Normal);
        let mut buf = Vec::new();
        formatter
            .format(Path::new("bin"), &sample_estimate(), &mut buf)
            .unwrap();
        colored::control::unset_override();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("github.com/pkg/errors"));
        assert!(output.contains("\x1b["));
    }
}
