// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors for SHA-256 backends.
//!
//! References:
//! [1] FIPS 180-4: Secure Hash Standard (SHS)
//!     https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf
//! [2] NIST SHA-256 Examples PDF
//!     https://csrc.nist.gov/csrc/media/projects/cryptographic-standards-and-guidelines/documents/examples/SHA256.pdf
//! [3] NIST CAVP SHA256ShortMsg.rsp
//!     https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/secure-hashing

mod vectors;

use rampart_util::{encode_hex, hex_to_bytes};

pub use vectors::{BOUNDARY_VECTORS, CAVP_SHORT_VECTORS, FIPS_VECTORS, MILLION_A};

/// How a vector's message is spelled out
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Literal bytes
    Bytes(&'static [u8]),
    /// Hex-encoded bytes (CAVP style)
    Hex(&'static str),
    /// `pattern` repeated `count` times
    Repeat {
        /// Repeated unit
        pattern: &'static [u8],
        /// Number of repetitions
        count: usize,
    },
}

impl Message {
    /// Materializes the message bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Message::Bytes(bytes) => bytes.to_vec(),
            Message::Hex(hex) => hex_to_bytes(hex),
            Message::Repeat { pattern, count } => pattern.repeat(*count),
        }
    }
}

/// A single known-answer test
#[derive(Debug, Clone, Copy)]
pub struct HashVector {
    /// Short description used in failure messages
    pub name: &'static str,
    /// Input message
    pub message: Message,
    /// Expected digest, lowercase hex
    pub digest: &'static str,
}

impl HashVector {
    /// Expected digest bytes
    pub fn expected(&self) -> [u8; 32] {
        let bytes = hex_to_bytes(self.digest);
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        out
    }
}

/// Every vector except the one-million-byte message
pub fn all_short_vectors() -> impl Iterator<Item = &'static HashVector> {
    FIPS_VECTORS
        .iter()
        .chain(CAVP_SHORT_VECTORS.iter())
        .chain(BOUNDARY_VECTORS.iter())
}

/// Runs `hash` over `vectors`, collecting one line per mismatch.
///
/// `hash` maps a message to its 32-byte digest; any backend (one-shot,
/// streaming with a particular chunking, ...) can be plugged in.
pub fn run_hash_vectors<'a, I, F>(vectors: I, mut hash: F) -> Result<(), String>
where
    I: IntoIterator<Item = &'a HashVector>,
    F: FnMut(&[u8]) -> [u8; 32],
{
    let mut failures = Vec::new();

    for tv in vectors {
        let message = tv.message.to_bytes();
        let digest = hash(&message);

        if digest != tv.expected() {
            failures.push(format!(
                "{} ({} bytes): expected {}, got {}",
                tv.name,
                message.len(),
                tv.digest,
                encode_hex(&digest)
            ));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("\n"))
    }
}
