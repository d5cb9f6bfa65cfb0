//! CLI argument parsing module for gostamp

use crate::forge::{
    ForgeConfig, DEFAULT_API_URL, DEFAULT_FORGE_HOST, DEFAULT_MAX_TAG_PAGES,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

const TM_LONG_ABOUT: &str = "\
Estimate the minimum build timestamp of a Go binary.

Every dependency embedded in the binary is dated: pseudo-versions
(v0.0.0-YYYYMMDDHHMMSS-<hash>) are decoded locally, tagged releases of
modules hosted on the forge are looked up through its API. The latest of
these dates is the earliest moment the binary could have been built.

Dependencies whose date cannot be found are skipped with a warning.
A dependency without any version aborts the whole run.";

/// Go binary build timestamp estimator
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gostamp",
    version,
    about = "Estimate when a Go binary was built from its dependency versions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Estimate the minimum build timestamp of a Go binary
    #[command(visible_alias = "t", long_about = TM_LONG_ABOUT)]
    Tm(TmArgs),
}

/// Arguments of the `tm` command
#[derive(Args, Debug, Clone)]
pub struct TmArgs {
    /// Go binary to analyze
    pub path: PathBuf,

    // Input options
    /// Treat PATH as a saved `go version -m` report instead of a binary
    #[arg(long)]
    pub listing: bool,

    /// Go executable used to read the build information
    #[arg(long, value_name = "EXE", default_value = "go")]
    pub go: PathBuf,

    // Forge options
    /// Forge access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Forge REST API base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Module path host whose packages are looked up on the forge
    #[arg(long, value_name = "HOST", default_value = DEFAULT_FORGE_HOST)]
    pub forge_host: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Minimum spacing between forge requests in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub request_interval: u64,

    /// Maximum number of tag pages scanned per repository
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_TAG_PAGES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_tag_pages: u32,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (debug logging, skipped dependencies)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - only the final estimate
    #[arg(short, long)]
    pub quiet: bool,
}

impl TmArgs {
    /// Build the forge configuration from the arguments
    pub fn forge_config(&self) -> ForgeConfig {
        ForgeConfig::new()
            .with_api_url(&self.api_url)
            .with_host(&self.forge_host)
            .with_token(self.token.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_request_interval(Duration::from_millis(self.request_interval))
            .with_max_tag_pages(self.max_tag_pages)
    }

    /// Whether the progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_tm(args: &[&str]) -> TmArgs {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Command::Tm(tm) => tm,
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_args() {
        let args = parse_tm(&["gostamp", "tm", "./server"]);
        assert_eq!(args.path, PathBuf::from("./server"));
        assert!(!args.listing);
        assert_eq!(args.go, PathBuf::from("go"));
        assert_eq!(args.api_url, "https://api.github.com");
        assert_eq!(args.forge_host, "github.com");
        assert_eq!(args.timeout, 30);
        assert_eq!(args.request_interval, 0);
        assert_eq!(args.max_tag_pages, 10);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_alias() {
        let args = parse_tm(&["gostamp", "t", "./server"]);
        assert_eq!(args.path, PathBuf::from("./server"));
    }

    #[test]
    fn test_path_is_required() {
        assert!(Cli::try_parse_from(["gostamp", "tm"]).is_err());
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["gostamp"]).is_err());
    }

    #[test]
    fn test_verbose_flags() {
        let args = parse_tm(&["gostamp", "tm", "bin", "-v"]);
        assert!(args.verbose);

        let args = parse_tm(&["gostamp", "tm", "bin", "--verbose"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_quiet_flags() {
        let args = parse_tm(&["gostamp", "tm", "bin", "-q"]);
        assert!(args.quiet);
        assert!(!args.show_progress());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gostamp", "tm", "bin", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_json_disables_progress() {
        let args = parse_tm(&["gostamp", "tm", "bin", "--json"]);
        assert!(args.json);
        assert!(!args.show_progress());
    }

    #[test]
    fn test_max_tag_pages_must_be_positive() {
        assert!(Cli::try_parse_from(["gostamp", "tm", "bin", "--max-tag-pages", "0"]).is_err());
    }

    #[test]
    fn test_forge_config() {
        let args = parse_tm(&[
            "gostamp",
            "tm",
            "bin",
            "--token",
            "secret",
            "--api-url",
            "http://127.0.0.1:8080/",
            "--forge-host",
            "git.example.com",
            "--timeout",
            "5",
            "--request-interval",
            "250",
            "--max-tag-pages",
            "3",
        ]);
        let config = args.forge_config();

        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.host, "git.example.com");
        assert_eq!(config.token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.request_interval, Duration::from_millis(250));
        assert_eq!(config.max_tag_pages, 3);
    }

    #[test]
    fn test_combined_flags() {
        let args = parse_tm(&[
            "gostamp",
            "tm",
            "/tmp/report.txt",
            "--listing",
            "--go",
            "/usr/local/go/bin/go",
            "--json",
            "-v",
        ]);
        assert!(args.listing);
        assert_eq!(args.go, PathBuf::from("/usr/local/go/bin/go"));
        assert!(args.json);
        assert!(args.verbose);
    }
}
