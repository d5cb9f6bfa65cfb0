//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: A dependency version could not be read or decoded
//! - ForgeError: Issues with code-hosting API communication
//! - ExtractionError: The dependency list could not be read from the binary
//! - ResolveError: A single dependency could not be dated (recoverable)
//! - AggregateError: A failure that aborts the whole batch

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dependency extraction errors
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Batch-level aggregation errors
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// Forge client construction errors
    #[error(transparent)]
    Forge(#[from] ForgeError),
}

/// Errors related to version strings
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// No version could be extracted from a versioned path
    #[error("no version found in '{path}'")]
    NoVersion { path: String },

    /// Pseudo-version does not carry a readable date
    #[error("malformed pseudo-version '{version}': {message}")]
    MalformedPseudoVersion { version: String, message: String },
}

/// Errors related to forge (code-hosting API) communication
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Repository or commit does not exist
    #[error("'{resource}' not found on {forge}")]
    NotFound { resource: String, forge: String },

    /// Repository exists but has no tag with this name
    #[error("tag '{tag}' not found in {owner}/{repo}")]
    TagNotFound {
        owner: String,
        repo: String,
        tag: String,
    },

    /// Package identity cannot be mapped to owner/repo
    #[error("package '{package}' is not a {forge} repository path")]
    InvalidPackage { package: String, forge: String },

    /// Request failed or returned a non-success status
    #[error("request to {forge} failed for '{resource}': {message}")]
    Transport {
        resource: String,
        forge: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {forge}")]
    RateLimited { forge: String },

    /// Timeout
    #[error("timeout while fetching '{resource}' from {forge}")]
    Timeout { resource: String, forge: String },

    /// Response body could not be decoded
    #[error("invalid response from {forge} for '{resource}': {message}")]
    InvalidResponse {
        resource: String,
        forge: String,
        message: String,
    },
}

/// Errors related to reading the dependency list of a binary
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Binary (or saved report) could not be opened
    #[error("error when opening the file {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External tool could not be started
    #[error("failed to run '{tool}': {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Dependency information could not be parsed
    #[error("error when parsing packages of {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

/// Why a single dependency produced no date
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Version could not be decoded
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Forge lookup failed
    #[error(transparent)]
    Forge(#[from] ForgeError),
}

/// Errors that abort a whole aggregation run
#[derive(Error, Debug)]
pub enum AggregateError {
    /// A dependency path carried no version at all
    #[error("failed to get version of '{package}': {source}")]
    VersionExtractionFailed {
        package: String,
        #[source]
        source: VersionError,
    },
}

impl VersionError {
    /// Creates a new NoVersion error
    pub fn no_version(path: impl Into<String>) -> Self {
        VersionError::NoVersion { path: path.into() }
    }

    /// Creates a new MalformedPseudoVersion error
    pub fn malformed(version: impl Into<String>, message: impl Into<String>) -> Self {
        VersionError::MalformedPseudoVersion {
            version: version.into(),
            message: message.into(),
        }
    }
}

impl ForgeError {
    /// Creates a new NotFound error
    pub fn not_found(resource: impl Into<String>, forge: impl Into<String>) -> Self {
        ForgeError::NotFound {
            resource: resource.into(),
            forge: forge.into(),
        }
    }

    /// Creates a new TagNotFound error
    pub fn tag_not_found(
        owner: impl Into<String>,
        repo: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        ForgeError::TagNotFound {
            owner: owner.into(),
            repo: repo.into(),
            tag: tag.into(),
        }
    }

    /// Creates a new InvalidPackage error
    pub fn invalid_package(package: impl Into<String>, forge: impl Into<String>) -> Self {
        ForgeError::InvalidPackage {
            package: package.into(),
            forge: forge.into(),
        }
    }

    /// Creates a new Transport error
    pub fn transport(
        resource: impl Into<String>,
        forge: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ForgeError::Transport {
            resource: resource.into(),
            forge: forge.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimited error
    pub fn rate_limited(forge: impl Into<String>) -> Self {
        ForgeError::RateLimited {
            forge: forge.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(resource: impl Into<String>, forge: impl Into<String>) -> Self {
        ForgeError::Timeout {
            resource: resource.into(),
            forge: forge.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        resource: impl Into<String>,
        forge: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ForgeError::InvalidResponse {
            resource: resource.into(),
            forge: forge.into(),
            message: message.into(),
        }
    }
}

impl ExtractionError {
    /// Creates a new OpenFailed error
    pub fn open_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractionError::OpenFailed {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseFailed error
    pub fn parse_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ExtractionError::ParseFailed {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_error_no_version() {
        let err = VersionError::no_version("somepkg@");
        let msg = format!("{}", err);
        assert!(msg.contains("no version found"));
        assert!(msg.contains("somepkg@"));
    }

    #[test]
    fn test_version_error_malformed() {
        let err = VersionError::malformed("v0.0.0-abc", "date segment too short");
        let msg = format!("{}", err);
        assert!(msg.contains("malformed pseudo-version"));
        assert!(msg.contains("too short"));
    }

    #[test]
    fn test_forge_error_tag_not_found() {
        let err = ForgeError::tag_not_found("pkg", "errors", "v0.9.1");
        let msg = format!("{}", err);
        assert!(msg.contains("tag 'v0.9.1' not found"));
        assert!(msg.contains("pkg/errors"));
    }

    #[test]
    fn test_forge_error_transport() {
        let err = ForgeError::transport("pkg/errors", "GitHub", "HTTP 500");
        let msg = format!("{}", err);
        assert!(msg.contains("request to GitHub failed"));
        assert!(msg.contains("HTTP 500"));
    }

    #[test]
    fn test_forge_error_rate_limit() {
        let err = ForgeError::rate_limited("GitHub");
        assert!(format!("{}", err).contains("rate limit exceeded"));
    }

    #[test]
    fn test_forge_error_invalid_package() {
        let err = ForgeError::invalid_package("github.com/pkg", "GitHub");
        let msg = format!("{}", err);
        assert!(msg.contains("github.com/pkg"));
        assert!(msg.contains("not a GitHub repository path"));
    }

    #[test]
    fn test_extraction_error_open_failed() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ExtractionError::open_failed("/path/to/bin", io_err);
        let msg = format!("{}", err);
        assert!(msg.contains("error when opening the file"));
        assert!(msg.contains("/path/to/bin"));
    }

    #[test]
    fn test_aggregate_error_message() {
        let err = AggregateError::VersionExtractionFailed {
            package: "somepkg".to_string(),
            source: VersionError::no_version("somepkg@"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("failed to get version of 'somepkg'"));
    }

    #[test]
    fn test_resolve_error_is_transparent() {
        let err: ResolveError = ForgeError::tag_not_found("pkg", "errors", "v0.9.1").into();
        assert_eq!(format!("{}", err), "tag 'v0.9.1' not found in pkg/errors");

        let err: ResolveError = VersionError::malformed("v1.2.3", "missing timestamp segment").into();
        assert!(format!("{}", err).contains("missing timestamp segment"));
    }

    #[test]
    fn test_app_error_from_extraction_error() {
        let err: AppError = ExtractionError::parse_failed("/bin", "no module info").into();
        assert!(format!("{}", err).contains("no module info"));
    }

    #[test]
    fn test_app_error_from_forge_error() {
        let err: AppError = ForgeError::rate_limited("GitHub").into();
        assert!(format!("{}", err).contains("rate limit exceeded"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = VersionError::no_version("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NoVersion"));
    }
}
