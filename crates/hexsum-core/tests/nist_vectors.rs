//! # FIPS 180-4 Known-Answer Tests
//!
//! Published SHA-256 example vectors plus padding-boundary lengths,
//! checked through both the one-shot and the incremental paths.

use hexsum_core::{digest, to_hex, Sha256, Sha256Digest};

/// Assert both entry points produce `expected` for `message`.
fn check(message: &[u8], expected: &str) {
    assert_eq!(to_hex(&digest(message)), expected, "one-shot");

    let mut hasher = Sha256::new();
    for chunk in message.chunks(7) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finalize().to_hex(), expected, "incremental");
}

// ---------------------------------------------------------------------------
// Standard vectors
// ---------------------------------------------------------------------------

#[test]
fn vector_empty() {
    check(
        b"",
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    );
}

#[test]
fn vector_abc_one_block() {
    check(
        b"abc",
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    );
}

#[test]
fn vector_448_bits_two_blocks() {
    check(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    );
}

#[test]
fn vector_896_bits() {
    check(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    );
}

#[test]
fn vector_one_million_a() {
    let expected = "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0";
    let message = vec![b'a'; 1_000_000];
    assert_eq!(digest(&message).to_hex(), expected);

    // Same message streamed in 1000-byte pieces, never buffered whole.
    let mut hasher = Sha256::new();
    let piece = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&piece);
    }
    assert_eq!(hasher.finalize().to_hex(), expected);
}

// ---------------------------------------------------------------------------
// The demonstration input
// ---------------------------------------------------------------------------

#[test]
fn vector_quebec_password() {
    check(
        b"Quebec@123456",
        "09b9b136dd7047f774ce919ed7cd7a1045dce4c773f33fdf83922b43589bac2e",
    );
}

// ---------------------------------------------------------------------------
// Padding boundaries against the reference crate
// ---------------------------------------------------------------------------

#[test]
fn padding_boundaries_match_reference() {
    use sha2::Digest as _;
    for len in [0usize, 1, 54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 129] {
        let message: Vec<u8> = (0..len).map(|i| (i * 31 + 7) as u8).collect();
        let reference = sha2::Sha256::digest(&message);
        assert_eq!(
            digest(&message).as_bytes().as_slice(),
            reference.as_slice(),
            "length {len}"
        );
    }
}

// ---------------------------------------------------------------------------
// Output shape
// ---------------------------------------------------------------------------

#[test]
fn digest_is_always_32_bytes() {
    for len in [0usize, 1, 100, 4096] {
        let d = digest(&vec![0u8; len]);
        assert_eq!(d.as_bytes().len(), 32);
        assert_eq!(d.to_hex().len(), 64);
    }
}

#[test]
fn parsed_reference_compares_equal() {
    let reference: Sha256Digest = "09B9B136DD7047F774CE919ED7CD7A1045DCE4C773F33FDF83922B43589BAC2E"
        .parse()
        .unwrap();
    assert_eq!(digest(b"Quebec@123456"), reference);
}

#[test]
fn digest_is_callable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || digest(format!("thread-{i}").as_bytes())))
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let d = h.join().unwrap();
        assert_eq!(d, digest(format!("thread-{i}").as_bytes()));
    }
}
