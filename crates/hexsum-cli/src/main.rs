//! # hexsum CLI entry point
//!
//! Parses command-line arguments, sets up logging, loads the optional
//! config file, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexsum_cli::config::HexsumConfig;
use hexsum_cli::hash::{run_hash, HashArgs};
use hexsum_cli::verify::{run_verify, VerifyArgs};

/// hexsum — SHA-256 digests from the command line.
#[derive(Parser, Debug)]
#[command(name = "hexsum", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of text, a file, or stdin.
    Hash(HashArgs),

    /// Check the SHA-256 digest against a reference value.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hexsum v{} starting", env!("CARGO_PKG_VERSION"));

    let result = HexsumConfig::load(cli.config.as_deref()).and_then(|config| {
        tracing::debug!(?config, "configuration loaded");
        match &cli.command {
            Commands::Hash(args) => run_hash(args, &config),
            Commands::Verify(args) => run_verify(args),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
