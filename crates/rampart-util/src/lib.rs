// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the Rampart crates.
//!
//! - Lowercase hex encoding and checked hex decoding
//! - Constant-time slice equality
//! - Big-endian word conversions that wipe their source after reading

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Hex decoding error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Input has an odd number of characters
    #[error("hex input has odd length {0}")]
    OddLength(usize),

    /// Input contains a byte that is not a hex digit
    #[error("invalid hex character {byte:#04x} at position {position}")]
    InvalidChar {
        /// Offending byte
        byte: u8,
        /// Byte offset within the input string
        position: usize,
    },
}

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// Slices of different length compare unequal immediately; for equal
/// lengths every byte is visited regardless of where differences occur.
///
/// # Example
///
/// ```
/// use rampart_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3, 4], &[1, 2, 3, 5]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Renders bytes as lowercase hex, two digits per byte, no separators.
///
/// # Example
///
/// ```
/// use rampart_util::encode_hex;
///
/// assert_eq!(encode_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }

    out
}

#[inline(always)]
fn nibble(byte: u8, position: usize) -> Result<u8, HexError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(HexError::InvalidChar { byte, position }),
    }
}

/// Parses a hexadecimal string into bytes.
///
/// Accepts upper- and lowercase digits. Rejects odd-length input and any
/// character outside `[0-9a-fA-F]`; nothing is coerced.
///
/// # Example
///
/// ```
/// use rampart_util::{decode_hex, HexError};
///
/// assert_eq!(decode_hex("DEADbeef"), Ok(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert_eq!(decode_hex("abc"), Err(HexError::OddLength(3)));
/// ```
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, HexError> {
    let raw = hex.as_bytes();

    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength(raw.len()));
    }

    let mut out = Vec::with_capacity(raw.len() / 2);

    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0], i * 2)?;
        let lo = nibble(pair[1], i * 2 + 1)?;
        out.push((hi << 4) | lo);
    }

    Ok(out)
}

/// Generates `{type}_from_be` and `{type}_to_be` functions for integer types.
macro_rules! impl_be_conversions {
    ($type:ty, $size:expr, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Reads ", stringify!($size), " big-endian bytes into a `", stringify!($type), "`, zeroizing the source bytes.")]
        #[inline(always)]
        pub fn $fn_from(dst: &mut $type, bytes: &mut [u8; $size]) {
            *dst = 0;
            for byte in bytes.iter_mut() {
                *dst = (*dst << 8) | (*byte as $type);
                *byte = 0;
            }
        }

        #[doc = concat!("Writes a `", stringify!($type), "` as big-endian bytes, zeroizing the source.")]
        #[inline(always)]
        pub fn $fn_to(src: &mut $type, bytes: &mut [u8; $size]) {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = (*src >> (8 * ($size - 1 - i))) as u8;
            }
            *src = 0;
        }
    };
}

impl_be_conversions!(u32, 4, u32_from_be, u32_to_be);
impl_be_conversions!(u64, 8, u64_from_be, u64_to_be);

/// Parses hex, panicking on malformed input. Test fixtures only.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
#[cfg(any(test, feature = "test-utils"))]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match decode_hex(hex) {
        Ok(bytes) => bytes,
        Err(e) => panic!("invalid hex fixture {hex:?}: {e}"),
    }
}

/// Flips bit `bit` of `bytes` (bit 0 is the MSB of byte 0).
///
/// # Panics
///
/// Panics if `bit >= bytes.len() * 8`.
#[cfg(any(test, feature = "test-utils"))]
pub fn flip_bit(bytes: &mut [u8], bit: usize) {
    bytes[bit / 8] ^= 0x80 >> (bit % 8);
}

/// Number of differing bits between two equal-length slices.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[cfg(any(test, feature = "test-utils"))]
pub fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len(), "hamming_distance: length mismatch");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum()
}
