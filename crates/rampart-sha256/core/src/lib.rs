// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Pure Rust SHA-256 engine
//!
//! Implementation per FIPS 180-4 (SHA-256). Message schedules, working
//! variables, buffered input and the running state are zeroized when they
//! go out of scope. No constant-time guarantees beyond
//! [`Digest::verify`].
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

pub mod compress;
pub mod consts;
pub mod padding;
pub mod schedule;
pub mod word;

mod digest;
mod error;
mod sha256;
mod state;

pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use digest::Digest;
pub use error::Sha256Error;
pub use padding::Block;
pub use schedule::MessageSchedule;
pub use sha256::{Sha256, sha256};
pub use state::HashState;
