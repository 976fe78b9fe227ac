//! # Hash Subcommand
//!
//! Computes and prints the SHA-256 digest of the selected input.
//!
//! ```bash
//! hexsum hash "Quebec@123456"
//! hexsum hash --file release.tar.gz --json
//! printf 'abc' | hexsum hash --label
//! ```

use std::io;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexsum_core::Sha256Digest;

use crate::config::{HexsumConfig, OutputFormat};
use crate::input::{hash_source, Hashed, InputArgs};

/// Arguments for the hash subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit a JSON object instead of the bare digest.
    #[arg(long)]
    pub json: bool,

    /// Print a line naming the input before the digest.
    #[arg(long)]
    pub label: bool,
}

/// JSON form of a hash result.
#[derive(Debug, Serialize)]
struct HashReport<'a> {
    algorithm: &'static str,
    source: String,
    length: u64,
    digest: &'a Sha256Digest,
}

/// Render a hash result according to flags and config.
pub fn render(hashed: &Hashed, args: &HashArgs, config: &HexsumConfig) -> Result<String> {
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output
    };
    match format {
        OutputFormat::Json => {
            let report = HashReport {
                algorithm: "sha256",
                source: hashed.source.to_string(),
                length: hashed.length,
                digest: &hashed.digest,
            };
            Ok(serde_json::to_string(&report)?)
        }
        OutputFormat::Plain if args.label || config.label => {
            Ok(format!("{} SHA256:\n{}", hashed.source, hashed.digest))
        }
        OutputFormat::Plain => Ok(hashed.digest.to_hex()),
    }
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs, config: &HexsumConfig) -> Result<u8> {
    let source = args.input.source();
    let hashed = hash_source(&source, io::stdin().lock())?;
    tracing::info!(source = %hashed.source, digest = %hashed.digest, "computed digest");
    println!("{}", render(&hashed, args, config)?);
    Ok(0)
}
