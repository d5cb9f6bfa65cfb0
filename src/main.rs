//! gostamp - Go binary build timestamp estimator CLI tool
//!
//! Reads the dependency list embedded in a Go binary and reports the
//! latest dependency date as the minimum build timestamp.

use clap::Parser;
use gostamp::aggregator::VendorDateAggregator;
use gostamp::cli::{Cli, Command, TmArgs};
use gostamp::domain::BuildTimeEstimate;
use gostamp::error::AppError;
use gostamp::extract::{BuildInfoFileExtractor, DependencyExtractor, GoToolchainExtractor};
use gostamp::forge::GitHubClient;
use gostamp::logging::init_tracing;
use gostamp::output::{create_formatter, OutputConfig};
use gostamp::resolver::ReleaseDateResolver;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Tm(args) => {
            init_tracing(args.verbose, args.quiet);
            run(args).await
        }
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Estimate the minimum build timestamp of one binary and print the report
async fn run(args: TmArgs) -> anyhow::Result<ExitCode> {
    let estimate = estimate(&args).await?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet)
        .with_color(io::stdout().is_terminal());
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&args.path, &estimate, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Extract the dependencies of the binary and date them
async fn estimate(args: &TmArgs) -> Result<BuildTimeEstimate, AppError> {
    info!(path = %args.path.display(), "analyzing binary");

    let extractor: Box<dyn DependencyExtractor> = if args.listing {
        Box::new(BuildInfoFileExtractor::new())
    } else {
        Box::new(GoToolchainExtractor::with_go(&args.go))
    };
    let records = extractor.extract(&args.path)?;
    info!(count = records.len(), "dependencies extracted");

    let config = args.forge_config();
    let client = GitHubClient::new(&config)?;
    let resolver = ReleaseDateResolver::new(Arc::new(client))
        .with_host(config.host.as_str())
        .with_max_tag_pages(config.max_tag_pages);
    let aggregator = VendorDateAggregator::new(resolver).with_progress(args.show_progress());

    Ok(aggregator.aggregate(&records).await?)
}
