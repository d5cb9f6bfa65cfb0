//! Report rendering for build time estimates
//!
//! The text report is meant for terminals, the JSON report for scripts.
//! Both go to stdout; diagnostics never do.

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{TextFormatter, UNRESOLVED_MESSAGE};

use crate::domain::BuildTimeEstimate;
use std::io::Write;
use std::path::Path;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How much of the estimate is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Final estimate only
    Quiet,
    /// Resolved dependencies and the final estimate
    #[default]
    Normal,
    /// Also date sources and skipped dependencies
    Verbose,
}

impl Verbosity {
    /// Map the `--verbose` / `--quiet` flags; quiet wins
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Verbosity::Quiet,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }
}

/// Rendering settings of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub verbosity: Verbosity,
    /// ANSI colors in text output
    pub color: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments, colors off
    pub fn from_cli(json: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            verbosity: Verbosity::from_flags(verbose, quiet),
            color: false,
        }
    }

    /// Enable or disable colors
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Renders the estimate of one binary
pub trait OutputFormatter {
    fn format(
        &self,
        binary: &Path,
        estimate: &BuildTimeEstimate,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Pick the formatter for a configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.verbosity, config.color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
    }
}
