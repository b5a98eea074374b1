// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_util::HexError;
use thiserror::Error;

/// SHA-256 input error
///
/// Hashing itself is total over byte slices; every variant here rejects
/// input before any padding or compression happens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// Message bit length does not fit the 64-bit length field
    #[error("message length exceeds 2^64 - 1 bits")]
    MessageTooLong,

    /// Hex text could not be decoded into bytes
    #[error("invalid hex input: {0}")]
    Hex(#[from] HexError),

    /// Byte input has the wrong length for a fixed-size value
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Resume offset is not a whole number of blocks
    #[error("resume offset {0} is not a multiple of the 64-byte block size")]
    UnalignedResume(u64),
}
