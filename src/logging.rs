//! Diagnostic logging setup
//!
//! Diagnostics (skipped dependencies, forge lookups) go to stderr through
//! `tracing`, so that stdout only carries the report.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log level for the given CLI verbosity
pub fn default_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Filter directive used when `RUST_LOG` is not set.
///
/// Debug output is limited to this crate; dependencies stay at `warn`.
pub fn default_directive(verbose: bool, quiet: bool) -> String {
    let level = default_level(verbose, quiet);
    if level == Level::DEBUG {
        format!("warn,{}=debug", env!("CARGO_CRATE_NAME"))
    } else {
        level.as_str().to_lowercase()
    }
}

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the CLI verbosity. Only the first call
/// in a process takes effect.
pub fn init_tracing(verbose: bool, quiet: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false, false), Level::WARN);
        assert_eq!(default_level(true, false), Level::DEBUG);
        assert_eq!(default_level(false, true), Level::ERROR);
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "warn");
        assert_eq!(default_directive(false, true), "error");
        assert_eq!(default_directive(true, false), "warn,gostamp=debug");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(false, false);
        init_tracing(true, false);
    }
}
