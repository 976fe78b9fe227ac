//! # Verify Subcommand
//!
//! Hashes the selected input and compares it with a reference digest.
//! A malformed reference (wrong length, non-hex characters) is reported as
//! an error rather than compared.

use std::io;

use anyhow::{Context, Result};
use clap::Args;

use hexsum_core::Sha256Digest;

use crate::input::{hash_source, Hashed, InputArgs};

/// Arguments for the verify subcommand.
#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Reference digest, 64 hex characters in either case.
    #[arg(long)]
    pub expected: String,
}

/// Result of comparing a computed digest with the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Match(Sha256Digest),
    Mismatch {
        expected: Sha256Digest,
        computed: Sha256Digest,
    },
}

impl Verdict {
    /// Process exit code for this verdict.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Match(_) => 0,
            Self::Mismatch { .. } => 1,
        }
    }

    /// One-line human-readable report.
    pub fn render(&self) -> String {
        match self {
            Self::Match(d) => format!("OK {d}"),
            Self::Mismatch { expected, computed } => {
                format!("MISMATCH expected {expected} computed {computed}")
            }
        }
    }
}

/// Parse a user-supplied reference digest.
pub fn parse_expected(raw: &str) -> Result<Sha256Digest> {
    raw.trim()
        .parse::<Sha256Digest>()
        .with_context(|| format!("invalid reference digest {:?}", raw.trim()))
}

/// Compare a computed digest with the reference.
pub fn compare(hashed: &Hashed, expected: Sha256Digest) -> Verdict {
    if hashed.digest == expected {
        Verdict::Match(expected)
    } else {
        Verdict::Mismatch {
            expected,
            computed: hashed.digest,
        }
    }
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    // Reject a bad reference before reading any input.
    let expected = parse_expected(&args.expected)?;
    let hashed = hash_source(&args.input.source(), io::stdin().lock())?;
    let verdict = compare(&hashed, expected);
    match &verdict {
        Verdict::Match(_) => tracing::info!(source = %hashed.source, "digest matches"),
        Verdict::Mismatch { .. } => tracing::warn!(source = %hashed.source, "digest mismatch"),
    }
    println!("{}", verdict.render());
    Ok(verdict.exit_code())
}
