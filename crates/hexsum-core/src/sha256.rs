//! # SHA-256 (FIPS 180-4)
//!
//! Message padding, the 64-word message schedule, and the 64-round
//! compression function. [`Sha256`] is the incremental form; [`digest()`]
//! runs a fresh hasher over a whole message.
//!
//! All register arithmetic is modulo 2^32 (`wrapping_add`). Words are read
//! from and written to bytes big-endian.
//!
//! Not constant-time with respect to message length.

use std::io;

use crate::digest::{Sha256Digest, DIGEST_LEN};

/// Size of one compression block in bytes (512 bits).
pub const BLOCK_LEN: usize = 64;

/// Offset within the final block where the 64-bit length field begins.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Initial hash value H(0): first 32 bits of the fractional parts of the
/// square roots of the first eight primes.
const INITIAL_STATE: [u32; 8] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
];

/// Round constants K: first 32 bits of the fractional parts of the cube
/// roots of the first sixty-four primes.
const ROUND_CONSTANTS: [u32; 64] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5, 0x3956_c25b, 0x59f1_11f1, 0x923f_82a4,
    0xab1c_5ed5, 0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3, 0x72be_5d74, 0x80de_b1fe,
    0x9bdc_06a7, 0xc19b_f174, 0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc, 0x2de9_2c6f,
    0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da, 0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7,
    0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967, 0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc,
    0x5338_0d13, 0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85, 0xa2bf_e8a1, 0xa81a_664b,
    0xc24b_8b70, 0xc76c_51a3, 0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070, 0x19a4_c116,
    0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5, 0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208, 0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7,
    0xc671_78f2,
];

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0
#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1
#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0
#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1
#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one block into the 64-word message schedule.
fn schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
    let mut w = [0u32; 64];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// Run the 64 compression rounds for one block and fold the result into
/// `state`.
fn compress(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&k, &wt) in ROUND_CONSTANTS.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(wt);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}

/// Incremental SHA-256 hasher.
///
/// Feed bytes with [`update`](Self::update) in any chunking, then call
/// [`finalize`](Self::finalize). The result equals [`digest()`] over the
/// concatenation of every chunk.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
    /// Total message length in bytes.
    length: u64,
}

impl Sha256 {
    /// A hasher in the initial state.
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            length: 0,
        }
    }

    /// Absorb more message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u64);
        let mut rest = data;

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(rest.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&rest[..take]);
            self.buffered += take;
            rest = &rest[take..];
            if self.buffered < BLOCK_LEN {
                return;
            }
            let block = self.buffer;
            compress(&mut self.state, &block);
            self.buffered = 0;
        }

        let mut blocks = rest.chunks_exact(BLOCK_LEN);
        for chunk in blocks.by_ref() {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            compress(&mut self.state, &block);
        }

        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    /// Number of message bytes absorbed so far.
    pub fn len(&self) -> u64 {
        self.length
    }

    /// True if no message bytes have been absorbed.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Pad, process the final block(s), and return the digest.
    pub fn finalize(mut self) -> Sha256Digest {
        let bit_len = self.length.wrapping_mul(8);

        let mut block = [0u8; BLOCK_LEN];
        block[..self.buffered].copy_from_slice(&self.buffer[..self.buffered]);
        block[self.buffered] = 0x80;

        // No room for the length field: flush and pad a second block.
        if self.buffered >= LENGTH_OFFSET {
            compress(&mut self.state, &block);
            block = [0u8; BLOCK_LEN];
        }
        block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut self.state, &block);

        let mut out = [0u8; DIGEST_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(self.state) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        Sha256Digest::from_bytes(out)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Compute the SHA-256 digest of `message`.
///
/// Pure: a fresh register state is used for every call and nothing
/// outlives it.
pub fn digest(message: &[u8]) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(message);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_message() {
        assert_eq!(
            digest(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn abc() {
        assert_eq!(
            digest(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_is_deterministic() {
        let m = b"Quebec@123456";
        assert_eq!(digest(m), digest(m));
    }

    #[test]
    fn single_byte_0x80() {
        // The message byte equals the padding marker.
        assert_eq!(
            digest(&[0x80]).to_hex(),
            "76be8b528d0075f7aae98d6fa57a6d3c83ae480a8469e668d7b0af968995ac71"
        );
    }

    #[test]
    fn padding_spills_into_second_block_at_56_bytes() {
        assert_eq!(
            digest(&[b'a'; 55]).to_hex(),
            "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"
        );
        assert_eq!(
            digest(&[b'a'; 56]).to_hex(),
            "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"
        );
        assert_eq!(
            digest(&[b'a'; 64]).to_hex(),
            "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"
        );
    }

    #[test]
    fn byte_at_a_time_matches_one_shot() {
        let message: Vec<u8> = (0u8..=200).collect();
        let mut hasher = Sha256::new();
        for b in &message {
            hasher.update(std::slice::from_ref(b));
        }
        assert_eq!(hasher.len(), message.len() as u64);
        assert_eq!(hasher.finalize(), digest(&message));
    }

    #[test]
    fn empty_updates_are_no_ops() {
        let mut hasher = Sha256::new();
        hasher.update(b"");
        hasher.update(b"ab");
        hasher.update(b"");
        hasher.update(b"c");
        assert_eq!(hasher.finalize(), digest(b"abc"));
    }

    #[test]
    fn cloned_hasher_forks_state() {
        let mut base = Sha256::new();
        base.update(b"ab");
        let mut fork = base.clone();
        base.update(b"c");
        fork.update(b"d");
        assert_eq!(base.finalize(), digest(b"abc"));
        assert_eq!(fork.finalize(), digest(b"abd"));
    }

    #[test]
    fn io_write_feeds_hasher() {
        let mut hasher = Sha256::default();
        assert!(hasher.is_empty());
        write!(hasher, "Quebec@{}", 123456).unwrap();
        hasher.flush().unwrap();
        assert_eq!(hasher.finalize(), digest(b"Quebec@123456"));
    }

    #[test]
    fn io_copy_streams_reader() {
        let data = vec![0x5au8; 10_000];
        let mut hasher = Sha256::new();
        let n = io::copy(&mut data.as_slice(), &mut hasher).unwrap();
        assert_eq!(n, 10_000);
        assert_eq!(hasher.finalize(), digest(&data));
    }

    #[test]
    fn debug_does_not_leak_state() {
        let mut hasher = Sha256::new();
        hasher.update(b"secret");
        let s = format!("{hasher:?}");
        assert!(s.contains("length: 6"));
        assert!(!s.contains("buffer"));
    }

    #[test]
    fn avalanche_flips_about_half_the_output_bits() {
        let base: Vec<u8> = (0..32u8).map(|i| i.wrapping_mul(37)).collect();
        let reference = digest(&base);
        let mut total = 0u32;
        let mut samples = 0u32;
        for bit in 0..base.len() * 8 {
            let mut m = base.clone();
            m[bit / 8] ^= 1 << (bit % 8);
            let flipped = digest(&m);
            total += reference
                .as_bytes()
                .iter()
                .zip(flipped.as_bytes())
                .map(|(x, y)| (x ^ y).count_ones())
                .sum::<u32>();
            samples += 1;
        }
        let mean = f64::from(total) / f64::from(samples);
        assert!((118.0..138.0).contains(&mean), "mean flipped bits {mean}");
    }
}
