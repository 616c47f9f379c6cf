//! GPS CLI - Command line interface for GPS cost terms
//!
//! Evaluates a configured cost sum on a recorded trajectory sample. This CLI
//! is for debugging cost configurations outside the optimizer.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gps_core::{Config, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{config, eval};

#[derive(Parser)]
#[command(name = "gps-cost")]
#[command(author, version, about = "GPS cost terms - evaluate trajectory costs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to $GPS_CONFIG, ./gps.toml, ~/.config/gps/gps.toml)
    #[arg(short, long, global = true, env = "GPS_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the configured cost on a sample file
    Eval(eval::EvalArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging settings come from the config when it loads; commands that
    // need the config report the load error themselves.
    let loaded = Config::load(cli.config.as_deref());
    let logging = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_logging(&logging, cli.verbose);

    match cli.command {
        Commands::Eval(args) => eval::run(args, loaded?),
        Commands::Config(cmd) => config::run(cmd, loaded, cli.config.as_deref()),
    }
}

/// EnvFilter directive: `--verbose`, else `logging.level` taken verbatim
fn log_directive(logging: &LoggingConfig, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        logging.level.clone()
    }
}

fn init_logging(logging: &LoggingConfig, verbose: bool) {
    let directive = log_directive(logging, verbose);

    let (filter, invalid) = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match tracing_subscriber::EnvFilter::try_new(&directive) {
            Ok(filter) => (filter, None),
            Err(err) => (tracing_subscriber::EnvFilter::new("info"), Some(err)),
        },
    };

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    if let Some(err) = invalid {
        tracing::warn!("Invalid logging.level {:?} ({}), using \"info\"", directive, err);
    }
}
