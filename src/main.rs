//! Browse-Mirror main entry point
//!
//! This is the command-line interface for the Browse-Mirror downloader.

use browse_mirror::config::{load_config, Settings};
use browse_mirror::crawl;
use browse_mirror::output::print_summary;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Browse-Mirror: download files from a directory-listing site
///
/// Browse-Mirror walks the site's `/api/browse` listing recursively, mirrors
/// its folder tree into a local directory and downloads the files whose
/// extension matches the requested types.
///
/// Examples:
///
///   browse-mirror -u http://192.168.1.234:8080 -o images -t pdf,jpg,png
///
///   browse-mirror --url https://example.com --types all
#[derive(Parser, Debug)]
#[command(name = "browse-mirror")]
#[command(version)]
#[command(about = "Download files from a directory-listing site", long_about)]
struct Cli {
    /// Base URL of the site (http/https)
    #[arg(short, long, value_name = "URL", required_unless_present = "config")]
    url: Option<String>,

    /// Directory to save files into [default: downloaded_files]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Comma-separated extensions without dots, or 'all' for every file
    /// [default: jpg,png,jpeg,gif,bmp,webp]
    #[arg(short, long, value_name = "TYPES")]
    types: Option<String>,

    /// Path to a TOML configuration file (CLI flags take precedence)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Validate TLS certificates (by default invalid certificates are accepted)
    #[arg(long)]
    verify_tls: bool,

    /// User-Agent header to send
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Settings given on the command line; unset flags stay `None`
    fn settings(&self) -> Settings {
        Settings {
            url: self.url.clone(),
            output: self.output.clone(),
            types: self.types.clone(),
            verify_tls: self.verify_tls.then_some(true),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match load_config(cli.config.as_deref(), cli.settings()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Base URL: {}", config.base_url);
    tracing::info!("Output Dir: {}", config.output_dir.display());
    tracing::info!("Types: {}", config.filter);
    if config.tls.accepts_invalid_certs() {
        tracing::warn!("TLS certificate validation is disabled (use --verify-tls to enable)");
    }

    let quiet = cli.quiet;
    let summary = crawl(config).await?;

    if !quiet {
        print_summary(&summary);
    }

    // Per-folder and per-file failures are reported, not turned into an exit code
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("browse_mirror=info,warn"),
            1 => EnvFilter::new("browse_mirror=debug,info"),
            2 => EnvFilter::new("browse_mirror=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
