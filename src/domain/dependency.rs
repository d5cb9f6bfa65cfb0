//! Dependency information structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A third-party module embedded in a Go binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Module path (e.g., "github.com/pkg/errors")
    pub package_identity: String,
    /// Filesystem-style path carrying the version after `@`
    /// (e.g., "github.com/pkg/errors@v0.9.1")
    pub versioned_path: String,
}

impl DependencyRecord {
    /// Creates a new dependency record
    pub fn new(package_identity: impl Into<String>, versioned_path: impl Into<String>) -> Self {
        Self {
            package_identity: package_identity.into(),
            versioned_path: versioned_path.into(),
        }
    }

    /// Creates a record from a module path and version, joined the way
    /// the Go module cache lays out directories
    pub fn from_module(module: &str, version: &str) -> Self {
        Self::new(module, format!("{}@{}", module, version))
    }

    /// Returns the raw text after the last `@`, if any
    pub fn raw_version(&self) -> Option<&str> {
        crate::version::extract_version(&self.versioned_path)
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.package_identity, self.versioned_path)
    }
}
