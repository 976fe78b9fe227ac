//! # Hex Encoding
//!
//! Lowercase hex rendering and case-insensitive parsing. Two characters
//! per byte, most significant nibble first.

use crate::error::DigestError;

const LOWER: &[u8; 16] = b"0123456789abcdef";

/// Render bytes as a lowercase hex string.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(LOWER[usize::from(b >> 4)] as char);
        out.push(LOWER[usize::from(b & 0x0f)] as char);
    }
    out
}

/// Parse a hex string of even length into bytes. Accepts either case.
pub fn decode(s: &str) -> Result<Vec<u8>, DigestError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(DigestError::InvalidLength {
            expected: chars.len() + 1,
            actual: chars.len(),
        });
    }
    let mut out = Vec::with_capacity(chars.len() / 2);
    for (i, pair) in chars.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0], i * 2)?;
        let lo = nibble(pair[1], i * 2 + 1)?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

/// Parse exactly `2 * N` hex characters into a fixed-size array.
pub fn decode_array<const N: usize>(s: &str) -> Result<[u8; N], DigestError> {
    let actual = s.chars().count();
    if actual != N * 2 {
        return Err(DigestError::InvalidLength {
            expected: N * 2,
            actual,
        });
    }
    let bytes = decode(s)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn nibble(c: char, position: usize) -> Result<u8, DigestError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(DigestError::InvalidHexChar { position, found: c })
}
