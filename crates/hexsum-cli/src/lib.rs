//! # hexsum-cli — SHA-256 Command-Line Interface
//!
//! Thin caller around `hexsum-core`: reads a message, prints its digest,
//! and optionally compares it with a reference value.
//!
//! ## Subcommands
//!
//! - `hexsum hash` — Print the digest of text, a file, or stdin.
//! - `hexsum verify` — Compare the digest with `--expected`.
//!
//! ```bash
//! hexsum hash "Quebec@123456" --label
//! hexsum verify "Quebec@123456" \
//!     --expected 09b9b136dd7047f774ce919ed7cd7a1045dce4c773f33fdf83922b43589bac2e
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers.
//! - Hashing itself lives in `hexsum-core`; nothing here touches the
//!   algorithm.
//! - Results go to stdout, logs to stderr.

pub mod config;
pub mod hash;
pub mod input;
pub mod verify;

pub use config::{HexsumConfig, OutputFormat};
