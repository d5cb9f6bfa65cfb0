//! Forge client configuration
//!
//! Everything the GitHub client needs is carried here explicitly, so that
//! tests and callers can point it at another server, add credentials or
//! throttle requests.

use std::time::Duration;

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Module path prefix of repositories served by the forge
pub const DEFAULT_FORGE_HOST: &str = "github.com";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("gostamp/", env!("CARGO_PKG_VERSION"));

/// Number of tags requested per page (GitHub maximum)
pub const TAGS_PER_PAGE: usize = 100;

/// Default number of tag pages scanned per repository
pub const DEFAULT_MAX_TAG_PAGES: u32 = 10;

/// Configuration for talking to the forge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    /// REST API base URL, without trailing slash
    pub api_url: String,
    /// Module path host whose packages live on this forge
    pub host: String,
    /// Optional bearer token; anonymous access is tightly rate-limited
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Minimum spacing between two requests
    pub request_interval: Duration,
    /// Maximum number of tag pages scanned per repository
    pub max_tag_pages: u32,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            host: DEFAULT_FORGE_HOST.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            request_interval: Duration::ZERO,
            max_tag_pages: DEFAULT_MAX_TAG_PAGES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ForgeConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the module host prefix
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the access token; empty tokens are ignored
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the minimum spacing between requests
    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    /// Set the maximum number of tag pages scanned per repository
    pub fn with_max_tag_pages(mut self, pages: u32) -> Self {
        self.max_tag_pages = pages.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ForgeConfig::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.host, "github.com");
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.request_interval, Duration::ZERO);
        assert_eq!(config.max_tag_pages, 10);
        assert!(config.user_agent.starts_with("gostamp/"));
    }

    #[test]
    fn test_with_api_url_trims_trailing_slash() {
        let config = ForgeConfig::new().with_api_url("http://127.0.0.1:1234/");
        assert_eq!(config.api_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn test_with_token_ignores_empty() {
        let config = ForgeConfig::new().with_token(Some("  ".to_string()));
        assert!(config.token.is_none());

        let config = ForgeConfig::new().with_token(Some("ghp_abc".to_string()));
        assert_eq!(config.token.as_deref(), Some("ghp_abc"));
    }

    #[test]
    fn test_with_max_tag_pages_at_least_one() {
        let config = ForgeConfig::new().with_max_tag_pages(0);
        assert_eq!(config.max_tag_pages, 1);
    }

    #[test]
    fn test_builder_chain() {
        let config = ForgeConfig::new()
            .with_host("gitlab.com")
            .with_timeout(Duration::from_secs(5))
            .with_request_interval(Duration::from_millis(250));
        assert_eq!(config.host, "gitlab.com");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.request_interval, Duration::from_millis(250));
    }
}
