// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1.1
//!
//! A message of `L` bytes is followed by `0x80`, then zero bytes until the
//! length is 56 mod 64, then the 64-bit big-endian encoding of `L * 8`.
//! Padding is always applied, including for `L == 0`.
//!
//! The bit length must fit in 64 bits. Longer messages are rejected with
//! [`Sha256Error::MessageTooLong`] instead of letting the length field wrap.

use alloc::vec;
use alloc::vec::Vec;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, PAD_MARKER};
use crate::error::Sha256Error;

/// One 512-bit message block
pub type Block = [u8; BLOCK_LEN];

/// Bit length of a message of `len` bytes.
///
/// Fails when `len * 8` does not fit the 64-bit length field.
#[inline]
pub fn bit_length(len: u64) -> Result<u64, Sha256Error> {
    len.checked_mul(8).ok_or(Sha256Error::MessageTooLong)
}

/// Number of bytes appended to a message of `len` bytes (between 9 and 72).
#[inline]
pub fn padding_len(len: u64) -> usize {
    let rem = (len % BLOCK_LEN as u64) as usize;
    // zeros needed so that rem + 1 + zeros == 56 (mod 64)
    let zeros = (2 * BLOCK_LEN - LENGTH_FIELD_LEN - 1 - rem) % BLOCK_LEN;

    1 + zeros + LENGTH_FIELD_LEN
}

/// Fills `out` with `0x80 ‖ 0* ‖ be64(bit_len)`.
///
/// `out` must already be sized to the padding length.
#[inline]
pub(crate) fn fill_padding(out: &mut [u8], bit_len: u64) {
    debug_assert!(out.len() > LENGTH_FIELD_LEN);

    let len_at = out.len() - LENGTH_FIELD_LEN;
    out.fill(0);
    out[0] = PAD_MARKER;
    out[len_at..].copy_from_slice(&bit_len.to_be_bytes());
}

/// Writes the padding for a message of `len` bytes into the front of `out`.
///
/// Returns the number of bytes written.
pub fn write_padding(out: &mut [u8], len: u64) -> Result<usize, Sha256Error> {
    let bit_len = bit_length(len)?;
    let n = padding_len(len);

    if out.len() < n {
        return Err(Sha256Error::InvalidLength {
            expected: n,
            actual: out.len(),
        });
    }

    fill_padding(&mut out[..n], bit_len);

    Ok(n)
}

/// The exact bytes that follow a message of `len` bytes in its padded form.
///
/// `m ‖ glue_padding(m.len())` is block aligned, and continuing to hash after
/// it only needs the digest of `m` (see [`Sha256::resume`](crate::Sha256::resume)).
pub fn glue_padding(len: u64) -> Result<Vec<u8>, Sha256Error> {
    let bit_len = bit_length(len)?;
    let mut out = vec![0u8; padding_len(len)];
    fill_padding(&mut out, bit_len);

    Ok(out)
}

/// Pads a complete message into a whole number of blocks.
///
/// ```
/// use rampart_sha256_core::padding::pad;
///
/// let padded = pad(b"abc").expect("abc is short");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(&padded[..4], b"abc\x80");
/// assert_eq!(padded[63], 24);
/// ```
pub fn pad(message: &[u8]) -> Result<Vec<u8>, Sha256Error> {
    let len = u64::try_from(message.len()).map_err(|_| Sha256Error::MessageTooLong)?;
    let bit_len = bit_length(len)?;

    let mut padded = vec![0u8; message.len() + padding_len(len)];
    let (head, tail) = padded.split_at_mut(message.len());
    head.copy_from_slice(message);
    fill_padding(tail, bit_len);

    Ok(padded)
}

/// Iterates over the whole 64-byte blocks of `data`, in order.
pub fn blocks(data: &[u8]) -> Blocks<'_> {
    Blocks { rest: data }
}

/// Iterator returned by [`blocks`]
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: &'a [u8],
}

impl<'a> Blocks<'a> {
    /// Trailing bytes that do not form a whole block and are never yielded
    pub fn remainder(&self) -> &'a [u8] {
        let whole = self.rest.len() - self.rest.len() % BLOCK_LEN;
        &self.rest[whole..]
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let (block, rest) = self.rest.split_first_chunk::<BLOCK_LEN>()?;
        self.rest = rest;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.len() / BLOCK_LEN;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Blocks<'_> {}
