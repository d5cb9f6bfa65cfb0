//! Dependency extraction from Go binaries
//!
//! This module provides:
//! - The extraction interface the aggregator consumes
//! - A parser for the build information report printed by `go version -m`
//! - Adapters reading that report from the Go toolchain or from a saved file

mod go_tool;
mod listing;

pub use go_tool::GoToolchainExtractor;
pub use listing::BuildInfoFileExtractor;

use crate::domain::DependencyRecord;
use crate::error::ExtractionError;
use std::path::Path;

/// Trait for reading the embedded dependency list of a binary
pub trait DependencyExtractor {
    /// Extract one record per embedded dependency, in binary order
    fn extract(&self, path: &Path) -> Result<Vec<DependencyRecord>, ExtractionError>;
}

/// Parse a `go version -m` report into dependency records.
///
/// Returns `None` if the report carries no module information at all.
/// A `=>` line with a version replaces the `dep` line above it with the
/// replacement module and version. A replacement by a local directory has
/// no version and keeps the original requirement.
pub fn parse_build_info(report: &str) -> Option<Vec<DependencyRecord>> {
    let mut records: Vec<(String, String)> = Vec::new();
    let mut has_module_info = false;

    for line in report.lines() {
        let mut fields = line.trim().split('\t').map(str::trim);
        let Some(kind) = fields.next() else {
            continue;
        };

        match kind {
            "path" | "mod" => has_module_info = true,
            "dep" => {
                has_module_info = true;
                let module = fields.next().unwrap_or_default();
                let version = fields.next().unwrap_or_default();
                if !module.is_empty() {
                    records.push((module.to_string(), version.to_string()));
                }
            }
            "=>" => {
                let replacement = fields.next().unwrap_or_default();
                let version = fields.next().unwrap_or_default();
                if let Some(last) = records.last_mut() {
                    if !replacement.is_empty() && !version.is_empty() {
                        *last = (replacement.to_string(), version.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    if !has_module_info {
        return None;
    }

    Some(
        records
            .iter()
            .map(|(module, version)| DependencyRecord::from_module(module, version))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "./server: go1.21.5
\tpath\texample.com/server
\tmod\texample.com/server\t(devel)\t
\tdep\tgithub.com/pkg/errors\tv0.9.1\th1:FEBLx1zS214owpjy7qsBeixbURkuhQAwrK5UwLGTwt4=
\tdep\tgolang.org/x/sys\tv0.0.0-20190227000051-27936f6d90f9\th1:abc=
\tbuild\t-compiler=gc
\tbuild\tGOOS=linux
";

    #[test]
    fn test_parse_build_info_dependencies() {
        let records = parse_build_info(REPORT).unwrap();
        assert_eq!(
            records,
            vec![
                DependencyRecord::from_module("github.com/pkg/errors", "v0.9.1"),
                DependencyRecord::from_module(
                    "golang.org/x/sys",
                    "v0.0.0-20190227000051-27936f6d90f9"
                ),
            ]
        );
    }

    #[test]
    fn test_parse_build_info_replacement_with_version() {
        let report = "bin: go1.22.0
\tpath\texample.com/cmd
\tdep\tgithub.com/foo/bar\tv1.0.0\th1:x=
\t=>\tgithub.com/fork/bar\tv1.0.1-fix\th1:y=
";
        let records = parse_build_info(report).unwrap();
        assert_eq!(
            records,
            vec![DependencyRecord::from_module(
                "github.com/fork/bar",
                "v1.0.1-fix"
            )]
        );
    }

    #[test]
    fn test_parse_build_info_local_replacement_keeps_version() {
        let report = "bin: go1.22.0
\tpath\texample.com/cmd
\tdep\tgithub.com/foo/bar\tv1.0.0\t
\t=>\t../bar\t\t
";
        let records = parse_build_info(report).unwrap();
        assert_eq!(records[0].versioned_path, "github.com/foo/bar@v1.0.0");
    }

    #[test]
    fn test_parse_build_info_without_dependencies() {
        let report = "bin: go1.22.0\n\tpath\texample.com/cmd\n\tmod\texample.com/cmd\t(devel)\t\n";
        assert_eq!(parse_build_info(report), Some(Vec::new()));
    }

    #[test]
    fn test_parse_build_info_without_module_info() {
        assert_eq!(parse_build_info("bin: go1.22.0\n"), None);
        assert_eq!(parse_build_info(""), None);
    }

    #[test]
    fn test_parse_build_info_keeps_missing_version() {
        let report = "bin: go1.22.0\n\tdep\tsomepkg\t\t\n";
        let records = parse_build_info(report).unwrap();
        assert_eq!(records[0].versioned_path, "somepkg@");
    }
}
