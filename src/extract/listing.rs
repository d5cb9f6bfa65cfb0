//! Extraction from a saved `go version -m` report

use crate::domain::DependencyRecord;
use crate::error::ExtractionError;
use crate::extract::{parse_build_info, DependencyExtractor};
use std::path::Path;

/// Extractor reading a build information report from disk
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildInfoFileExtractor;

impl BuildInfoFileExtractor {
    /// Create a new report file extractor
    pub fn new() -> Self {
        Self
    }
}

impl DependencyExtractor for BuildInfoFileExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<DependencyRecord>, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::open_failed(path, e))?;
        let report = String::from_utf8_lossy(&bytes);

        parse_build_info(&report)
            .ok_or_else(|| ExtractionError::parse_failed(path, "no Go module information found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_extract_from_report_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("buildinfo.txt");
        fs::write(
            &path,
            "bin: go1.21.0\n\tpath\texample.com/cmd\n\tdep\tgithub.com/pkg/errors\tv0.9.1\th1:x=\n",
        )
        .unwrap();

        let records = BuildInfoFileExtractor::new().extract(&path).unwrap();
        assert_eq!(
            records,
            vec![DependencyRecord::from_module("github.com/pkg/errors", "v0.9.1")]
        );
    }

    #[test]
    fn test_extract_missing_report() {
        let result = BuildInfoFileExtractor::new().extract(Path::new("/nonexistent/report.txt"));
        assert!(matches!(result, Err(ExtractionError::OpenFailed { .. })));
    }

    #[test]
    fn test_extract_report_without_module_info() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "just some text\n").unwrap();

        let result = BuildInfoFileExtractor::new().extract(&path);
        assert!(matches!(result, Err(ExtractionError::ParseFailed { .. })));
    }
}
