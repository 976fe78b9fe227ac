//! # Message Input
//!
//! Resolves where the message comes from (a literal argument, a file, or
//! stdin) and streams it through the hasher.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexsum_core::{Sha256, Sha256Digest};

/// Input selection shared by `hash` and `verify`.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to hash (its UTF-8 bytes). Reads stdin when neither this nor
    /// --file is given.
    pub text: Option<String>,

    /// Hash the contents of a file instead of a text argument.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Where the message bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputArgs {
    /// The selected source. A text argument wins over `--file` (clap
    /// already rejects both together).
    pub fn source(&self) -> Source {
        match (&self.text, &self.file) {
            (Some(text), _) => Source::Text(text.clone()),
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => Source::Stdin,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// A computed digest together with what was hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashed {
    pub source: Source,
    pub length: u64,
    pub digest: Sha256Digest,
}

/// Hash `source`, reading from `stdin` only for [`Source::Stdin`].
pub fn hash_source(source: &Source, mut stdin: impl Read) -> Result<Hashed> {
    let mut hasher = Sha256::new();
    match source {
        Source::Text(text) => hasher.update(text.as_bytes()),
        Source::File(path) => {
            let mut file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            io::copy(&mut file, &mut hasher)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        Source::Stdin => {
            io::copy(&mut stdin, &mut hasher).context("failed to read stdin")?;
        }
    }
    tracing::debug!(source = %source, length = hasher.len(), "message hashed");
    let length = hasher.len();
    Ok(Hashed {
        source: source.clone(),
        length,
        digest: hasher.finalize(),
    })
}
