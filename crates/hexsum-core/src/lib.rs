//! # hexsum-core — Self-Contained SHA-256
//!
//! A from-scratch FIPS 180-4 SHA-256 implementation with no hashing
//! dependency:
//!
//! - [`digest()`] hashes a whole message in one call. It is a pure
//!   function: fresh registers every call, no global state.
//! - [`Sha256`] is the incremental form (`update` / `finalize`), and also
//!   implements [`std::io::Write`] so readers can be streamed into it.
//! - [`Sha256Digest`] is the 32-byte output, with lowercase hex rendering,
//!   case-insensitive hex parsing, and serde support as a hex string.
//!
//! ```
//! let d = hexsum_core::digest(b"abc");
//! assert_eq!(
//!     hexsum_core::to_hex(&d),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O and no logging; callers own presentation.

#![forbid(unsafe_code)]

pub mod digest;
pub mod error;
pub mod hex;
pub mod sha256;

// Re-export primary types for ergonomic imports.
pub use digest::{to_hex, Sha256Digest, DIGEST_LEN, HEX_LEN};
pub use error::DigestError;
pub use sha256::{digest, Sha256, BLOCK_LEN};
