//! sitemap2csv main entry point
//!
//! This is the command-line interface that writes every page URL in a
//! sitemap tree to a CSV file.

use anyhow::Context;
use clap::Parser;
use sitemap2csv::config::{load_config, validate, Config};
use sitemap2csv::output::{print_processed_report, write_csv_file, ProcessedSummary};
use sitemap2csv::sitemap::{get_records, Fetcher};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// sitemap2csv: export sitemap URLs to CSV
///
/// Fetches a sitemap or sitemap index (optionally gzip-compressed), follows
/// every nested sitemap, and writes each page URL with its last-modified
/// date as `loc,lastmod` rows.
#[derive(Parser, Debug)]
#[command(name = "sitemap2csv")]
#[command(version)]
#[command(about = "Export sitemap URLs to CSV", long_about = None)]
struct Cli {
    /// URL of the sitemap or sitemap index
    #[arg(value_name = "SITEMAP_URL")]
    sitemap_url: String,

    /// Path of the CSV file to create
    #[arg(value_name = "OUTPUT_CSV")]
    output: PathBuf,

    /// Output CSV without header row
    #[arg(long)]
    no_header: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// User-Agent header for sitemap requests (overrides config)
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    let fetcher = Fetcher::new(&config.client).context("Failed to build HTTP client")?;

    tracing::info!("Fetching sitemap tree from {}", cli.sitemap_url);
    let result = match get_records(&fetcher, &cli.sitemap_url).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Sitemap traversal failed: {}", e);
            return Err(e.into());
        }
    };

    if !cli.quiet {
        print_processed_report(&result.processed);
    }

    let summary = ProcessedSummary::from_processed(&result.processed);
    tracing::info!(
        "Collected {} URLs from {} sitemaps",
        summary.urls,
        summary.sitemaps
    );

    write_csv_file(&cli.output, &result, config.output.header)
        .with_context(|| format!("Failed to write CSV file {}", cli.output.display()))?;

    if !cli.quiet {
        println!("CSV file created: {}", cli.output.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap2csv=warn,warn"),
            1 => EnvFilter::new("sitemap2csv=info,warn"),
            2 => EnvFilter::new("sitemap2csv=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(user_agent) = &cli.user_agent {
        config.client.user_agent = user_agent.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.client.timeout_seconds = Some(timeout);
    }
    if cli.no_header {
        config.output.header = false;
    }

    validate(&config).context("Invalid configuration")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "sitemap2csv",
            "--no-header",
            "--user-agent",
            "TestBot/2.0",
            "--timeout",
            "15",
            "https://example.com/sitemap.xml",
            "out.csv",
        ]);

        let config = resolve_config(&cli).unwrap();

        assert_eq!(cli.sitemap_url, "https://example.com/sitemap.xml");
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert!(!config.output.header);
        assert_eq!(config.client.user_agent, "TestBot/2.0");
        assert_eq!(config.client.timeout_seconds, Some(15));
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        let cli = Cli::parse_from([
            "sitemap2csv",
            "--timeout",
            "0",
            "https://example.com/sitemap.xml",
            "out.csv",
        ]);

        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_cli_requires_two_arguments() {
        assert!(Cli::try_parse_from(["sitemap2csv", "https://example.com/sitemap.xml"]).is_err());
    }
}
