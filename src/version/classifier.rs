//! Go module version classifier
//!
//! Handles version formats found in module cache paths:
//! - Semantic version: `github.com/pkg/errors@v0.9.1`
//! - Pseudo-version: `golang.org/x/sys@v0.0.0-20210101120000-abcdef123456`
//! - Incompatible module versions: `github.com/docker/docker@v17.12.0-ce+incompatible`

use crate::error::VersionError;
use std::fmt;

/// Marker appended to v2+ versions of packages without a go.mod
pub const INCOMPATIBLE_MARKER: &str = "+incompatible";

/// Base version Go uses for commits with no tagged release before them
pub const PSEUDO_BASE_SENTINEL: &str = "v0.0.0";

/// Classified version of a dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionDescriptor {
    /// A release tag such as `v1.2.3`
    Semantic(String),
    /// A `v0.0.0-<timestamp>-<commit>` pseudo-version, kept verbatim
    PseudoVersion(String),
    /// A release tag with the `+incompatible` marker removed
    IncompatibleSemantic(String),
}

impl VersionDescriptor {
    /// Returns the tag or raw pseudo-version string
    pub fn as_str(&self) -> &str {
        match self {
            VersionDescriptor::Semantic(tag)
            | VersionDescriptor::PseudoVersion(tag)
            | VersionDescriptor::IncompatibleSemantic(tag) => tag,
        }
    }
}

impl fmt::Display for VersionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionDescriptor::IncompatibleSemantic(tag) => {
                write!(f, "{}{}", tag, INCOMPATIBLE_MARKER)
            }
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Extracts the version from a versioned path: the text after the last `@`
/// up to the next `/`. Returns `None` if there is no `@` or nothing follows it.
pub fn extract_version(versioned_path: &str) -> Option<&str> {
    let (_, rest) = versioned_path.rsplit_once('@')?;
    let version = rest.split('/').next().unwrap_or_default();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

/// Classifies the version carried by a versioned path
pub fn classify(versioned_path: &str) -> Result<VersionDescriptor, VersionError> {
    let version =
        extract_version(versioned_path).ok_or_else(|| VersionError::no_version(versioned_path))?;

    if version.contains(INCOMPATIBLE_MARKER) {
        let tag = version.replace(INCOMPATIBLE_MARKER, "");
        if tag.is_empty() {
            return Err(VersionError::no_version(versioned_path));
        }
        return Ok(VersionDescriptor::IncompatibleSemantic(tag));
    }

    if version.contains(PSEUDO_BASE_SENTINEL) {
        return Ok(VersionDescriptor::PseudoVersion(version.to_string()));
    }

    Ok(VersionDescriptor::Semantic(version.to_string()))
}
