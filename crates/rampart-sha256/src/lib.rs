// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 (FIPS 180-4) in pure Rust.
//!
//! ```
//! use rampart_sha256::{finalize, hash, init, to_hex, update};
//!
//! let one_shot = hash(b"hello world").expect("short message");
//!
//! let mut ctx = init();
//! update(&mut ctx, b"hello ").expect("short message");
//! update(&mut ctx, b"world").expect("short message");
//!
//! assert_eq!(finalize(ctx), one_shot);
//! assert_eq!(
//!     to_hex(&one_shot),
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! ```
//!
//! SHA-256 is a Merkle–Damgård construction: the digest of `m` is the full
//! chaining state, so anyone holding it can compute the digest of
//! `m ‖ padding(m) ‖ suffix` ([`Sha256::resume`]). Use HMAC, not
//! `hash(key ‖ message)`, when a keyed digest is needed.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod batch;

use alloc::string::String;

pub use batch::hash_many;
pub use rampart_sha256_core::{
    BLOCK_LEN, Block, DIGEST_LEN, Digest, HashState, MessageSchedule, Sha256, Sha256Error,
    compress, consts, padding, schedule, word,
};

/// Hashes a complete message.
#[inline]
pub fn hash(message: &[u8]) -> Result<Digest, Sha256Error> {
    rampart_sha256_core::sha256(message)
}

/// Canonical rendering: 64 lowercase hex characters, no prefix or separators.
#[inline]
pub fn to_hex(digest: &Digest) -> String {
    digest.to_hex()
}

/// Starts a streaming computation.
#[inline]
pub fn init() -> Sha256 {
    Sha256::new()
}

/// Feeds the next chunk of a streaming computation.
#[inline]
pub fn update(ctx: &mut Sha256, chunk: &[u8]) -> Result<(), Sha256Error> {
    ctx.update(chunk)
}

/// Ends a streaming computation; the context cannot be used afterwards.
#[inline]
pub fn finalize(ctx: Sha256) -> Digest {
    ctx.finalize()
}
