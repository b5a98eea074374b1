// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 256-bit digest and its canonical renderings.
//!
//! The canonical forms are the 32-byte big-endian concatenation of H(N) and
//! its 64-character lowercase hex string. Anything else (uppercase,
//! separators, prefixes) is a separate conversion done by the caller.

use alloc::string::String;
use core::fmt;

use rampart_util::{constant_time_eq, decode_hex, encode_hex, u32_from_be, u32_to_be};

use crate::consts::{DIGEST_LEN, STATE_WORDS};
use crate::error::Sha256Error;

/// SHA-256 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Big-endian concatenation of the hash words H[0]..H[7]
    pub fn from_words(words: &[u32; STATE_WORDS]) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        let mut tmp_word = [0u8; 4];

        for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
            let mut w = *word;
            u32_to_be(&mut w, &mut tmp_word);
            chunk.copy_from_slice(&tmp_word);
        }

        Self(out)
    }

    /// Hash words H[0]..H[7] encoded by this digest
    pub fn to_words(&self) -> [u32; STATE_WORDS] {
        let mut words = [0u32; STATE_WORDS];
        let mut tmp_word = [0u8; 4];

        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            tmp_word.copy_from_slice(chunk);
            u32_from_be(word, &mut tmp_word);
        }

        words
    }

    /// Raw digest bytes
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consumes the digest into its bytes.
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// 64 lowercase hex characters, `H[0]` first
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }

    /// Parses a 64-character hex digest (either case).
    pub fn from_hex(hex: &str) -> Result<Self, Sha256Error> {
        let bytes = decode_hex(hex)?;
        Self::try_from(bytes.as_slice())
    }

    /// Constant-time comparison against expected digest bytes.
    ///
    /// Returns `false` for slices that are not exactly 32 bytes long.
    pub fn verify(&self, expected: &[u8]) -> bool {
        constant_time_eq(&self.0, expected)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = Sha256Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; DIGEST_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Sha256Error::InvalidLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            })
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
