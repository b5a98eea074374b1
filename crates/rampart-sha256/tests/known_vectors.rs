// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Known-answer tests through the public API
//
// References:
// [1] FIPS 180-4: Secure Hash Standard (SHS)
//     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
// [2] NIST CAVP SHA256ShortMsg.rsp

use rampart_sha256::{finalize, hash, init, to_hex, update};
use rampart_sha256_vectors::{MILLION_A, all_short_vectors, run_hash_vectors};

#[test]
fn test_hash_empty_hex() {
    let digest = hash(b"").expect("Failed to hash(..)");

    assert_eq!(
        to_hex(&digest),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_hash_abc_hex() {
    let digest = hash(b"abc").expect("Failed to hash(..)");

    assert_eq!(
        to_hex(&digest),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_hash_all_short_vectors() {
    let result = run_hash_vectors(all_short_vectors(), |m| {
        hash(m).expect("Failed to hash(..)").into_bytes()
    });

    if let Err(report) = result {
        panic!("known-answer failures:\n{report}");
    }
}

#[test]
fn test_million_a_streamed_in_1000_byte_chunks() {
    // FIPS 180-4 long message, fed the way a reader loop would
    let chunk = [b'a'; 1000];
    let mut ctx = init();

    for _ in 0..1000 {
        update(&mut ctx, &chunk).expect("Failed to update(..)");
    }

    assert_eq!(finalize(ctx).to_hex(), MILLION_A.digest);
}

#[test]
fn test_output_is_always_32_bytes() {
    for len in [0usize, 1, 55, 56, 64, 1000] {
        let digest = hash(&vec![0x5a; len]).expect("Failed to hash(..)");

        assert_eq!(digest.as_bytes().len(), 32);
        assert_eq!(to_hex(&digest).len(), 64);
        assert!(
            to_hex(&digest)
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }
}
