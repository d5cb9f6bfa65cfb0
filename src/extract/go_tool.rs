//! Extraction through the Go toolchain
//!
//! `go version -m <binary>` decodes the module information the linker
//! embedded in a Go executable, so no executable format is parsed here.

use crate::domain::DependencyRecord;
use crate::error::ExtractionError;
use crate::extract::{parse_build_info, DependencyExtractor};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Default Go executable
const DEFAULT_GO: &str = "go";

/// Extractor running `go version -m`
#[derive(Debug, Clone)]
pub struct GoToolchainExtractor {
    go: PathBuf,
}

impl GoToolchainExtractor {
    /// Create an extractor using `go` from PATH
    pub fn new() -> Self {
        Self::with_go(DEFAULT_GO)
    }

    /// Create an extractor using a specific Go executable
    pub fn with_go(go: impl Into<PathBuf>) -> Self {
        Self { go: go.into() }
    }

    /// Run `go version -m` and capture output
    fn run_command(&self, binary: &Path) -> std::io::Result<Output> {
        Command::new(&self.go)
            .args(["version", "-m"])
            .arg(binary)
            .output()
    }
}

impl Default for GoToolchainExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyExtractor for GoToolchainExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<DependencyRecord>, ExtractionError> {
        File::open(path).map_err(|e| ExtractionError::open_failed(path, e))?;

        debug!(go = %self.go.display(), binary = %path.display(), "reading build info");
        let output = self
            .run_command(path)
            .map_err(|source| ExtractionError::ToolFailed {
                tool: self.go.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::parse_failed(path, stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_build_info(&stdout)
            .ok_or_else(|| ExtractionError::parse_failed(path, "no Go module information found"))
    }
}
