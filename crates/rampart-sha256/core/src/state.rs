// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::compress;
use crate::consts::{H0, STATE_WORDS};
use crate::digest::Digest;
use crate::padding::Block;
use crate::schedule::MessageSchedule;

/// Running hash value H(i), threaded through the blocks of one message
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HashState {
    h: [u32; STATE_WORDS],
}

impl HashState {
    /// State before the first block: H(0)
    pub const fn new() -> Self {
        Self { h: H0 }
    }

    /// State taken over from a previous computation
    pub const fn from_words(h: [u32; STATE_WORDS]) -> Self {
        Self { h }
    }

    /// Current hash words
    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.h
    }

    /// Absorbs the next block, reusing `schedule` as scratch space.
    pub fn absorb(&mut self, block: &Block, schedule: &mut MessageSchedule) {
        schedule.expand(block);
        compress(&mut self.h, schedule);
    }

    /// Absorbs the next block with a temporary schedule.
    pub fn absorb_block(&mut self, block: &Block) {
        let mut schedule = MessageSchedule::new();
        self.absorb(block, &mut schedule);
    }

    /// Digest of the current state
    pub fn to_digest(&self) -> Digest {
        Digest::from_words(&self.h)
    }

    /// Consumes the state into its digest.
    pub fn into_digest(self) -> Digest {
        self.to_digest()
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}
