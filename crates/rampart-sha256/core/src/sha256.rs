// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 one-shot and streaming computation per FIPS 180-4 Section 6.2

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::BLOCK_LEN;
use crate::digest::Digest;
use crate::error::Sha256Error;
use crate::padding::{bit_length, blocks, fill_padding, pad, padding_len};
use crate::schedule::MessageSchedule;
use crate::state::HashState;

/// Hashes a complete message.
///
/// Pads the whole message up front, then schedules and compresses each
/// block in order.
///
/// ```
/// use rampart_sha256_core::sha256;
///
/// let digest = sha256(b"abc").expect("abc is short");
/// assert_eq!(
///     digest.to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn sha256(message: &[u8]) -> Result<Digest, Sha256Error> {
    let mut padded = pad(message)?;
    let mut state = HashState::new();
    let mut schedule = MessageSchedule::new();

    for block in blocks(&padded) {
        state.absorb(block, &mut schedule);
    }

    padded.zeroize();

    Ok(state.into_digest())
}

/// SHA-256 streaming context
///
/// Whole blocks are compressed as soon as they are available; a partial
/// trailing block waits in `buffer` until more data arrives or the context
/// is finalized. Everything is wiped on drop.
///
/// [`finalize`](Self::finalize) consumes the context, so no data can be
/// added after the digest has been produced.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    // Hash state H(i)
    state: HashState,

    // Scratch schedule reused for every block
    schedule: MessageSchedule,

    // Input buffering
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,

    // Bytes accepted so far; total_len * 8 always fits in u64
    total_len: u64,
}

impl Sha256 {
    /// Fresh context initialized with H(0)
    pub const fn new() -> Self {
        Self {
            state: HashState::new(),
            schedule: MessageSchedule::new(),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Continues a computation from a published digest.
    ///
    /// `processed_len` is the length of the padded message the digest was
    /// taken over and must be a whole number of blocks. Merkle–Damgård
    /// chaining means the digest is the entire carried state, so
    /// `resume(sha256(m), len(m ‖ glue_padding(m.len())))` followed by
    /// `update(suffix)` yields `sha256(m ‖ glue ‖ suffix)` without knowing
    /// `m` (length extension).
    pub fn resume(digest: &Digest, processed_len: u64) -> Result<Self, Sha256Error> {
        if processed_len % BLOCK_LEN as u64 != 0 {
            return Err(Sha256Error::UnalignedResume(processed_len));
        }

        bit_length(processed_len)?;

        Ok(Self {
            state: HashState::from_words(digest.to_words()),
            schedule: MessageSchedule::new(),
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            total_len: processed_len,
        })
    }

    /// Number of message bytes accepted so far
    pub fn bytes_processed(&self) -> u64 {
        self.total_len
    }

    /// Feeds the next chunk of the message.
    ///
    /// Chunks may have any size, including zero. Fails only when the total
    /// bit length would overflow the 64-bit length field, in which case the
    /// context is left untouched.
    pub fn update(&mut self, data: &[u8]) -> Result<(), Sha256Error> {
        let added = u64::try_from(data.len()).map_err(|_| Sha256Error::MessageTooLong)?;
        let total = self
            .total_len
            .checked_add(added)
            .ok_or(Sha256Error::MessageTooLong)?;
        bit_length(total)?;

        self.total_len = total;

        let mut data = data;

        // Top up a partially filled buffer first
        if self.buffer_len > 0 {
            let copy_len = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());

            self.buffer[self.buffer_len..self.buffer_len + copy_len]
                .copy_from_slice(&data[..copy_len]);
            self.buffer_len += copy_len;
            data = &data[copy_len..];

            if self.buffer_len < BLOCK_LEN {
                return Ok(());
            }

            self.state.absorb(&self.buffer, &mut self.schedule);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        // Process full blocks straight from the input
        let mut whole = blocks(data);
        for block in &mut whole {
            self.state.absorb(block, &mut self.schedule);
        }

        // Buffer remaining
        let remaining = whole.remainder();
        self.buffer[..remaining.len()].copy_from_slice(remaining);
        self.buffer_len = remaining.len();

        Ok(())
    }

    /// Pads, compresses the final block(s) and returns the digest.
    pub fn finalize(mut self) -> Digest {
        self.finalize_reset()
    }

    /// Like [`finalize`](Self::finalize), but leaves a fresh context behind.
    pub fn finalize_reset(&mut self) -> Digest {
        // Buffered bytes plus padding fill exactly one or two blocks
        let mut tail = [0u8; 2 * BLOCK_LEN];
        let tail_len = self.buffer_len + padding_len(self.total_len);

        tail[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);

        // update() rejects totals whose bit length overflows
        fill_padding(
            &mut tail[self.buffer_len..tail_len],
            self.total_len.wrapping_mul(8),
        );

        for block in blocks(&tail[..tail_len]) {
            self.state.absorb(block, &mut self.schedule);
        }

        let digest = self.state.to_digest();

        tail.zeroize();
        self.reset();

        digest
    }

    /// Wipes the context and restarts it at H(0).
    pub fn reset(&mut self) {
        self.zeroize();
        self.state = HashState::new();
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}
