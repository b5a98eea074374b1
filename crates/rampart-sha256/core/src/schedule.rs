// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message schedule per FIPS 180-4 Section 6.2.2 step 1
//!
//! The schedule depends only on one block, never on the hash state, so
//! schedules for later blocks can be prepared ahead of compression.

use rampart_util::u32_from_be;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_WORDS, SCHEDULE_LEN};
use crate::padding::Block;
use crate::word::{add32, ssig0, ssig1};

/// Message schedule W[0..63], wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MessageSchedule {
    w: [u32; SCHEDULE_LEN],
}

impl MessageSchedule {
    /// All-zero schedule, ready to be filled by [`expand`](Self::expand)
    pub const fn new() -> Self {
        Self {
            w: [0u32; SCHEDULE_LEN],
        }
    }

    /// Schedule for `block`
    pub fn from_block(block: &Block) -> Self {
        let mut schedule = Self::new();
        schedule.expand(block);
        schedule
    }

    /// Overwrites the schedule with the expansion of `block`.
    pub fn expand(&mut self, block: &Block) {
        let mut tmp_word = [0u8; 4];

        // W[0..15] from block (big-endian); u32_from_be wipes tmp_word
        for t in 0..BLOCK_WORDS {
            tmp_word.copy_from_slice(&block[t * 4..(t + 1) * 4]);
            u32_from_be(&mut self.w[t], &mut tmp_word);
        }

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in BLOCK_WORDS..SCHEDULE_LEN {
            self.w[t] = add32([
                ssig1(self.w[t - 2]),
                self.w[t - 7],
                ssig0(self.w[t - 15]),
                self.w[t - 16],
            ]);
        }
    }

    /// Scheduled words, one per round
    pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.w
    }
}

impl Default for MessageSchedule {
    fn default() -> Self {
        Self::new()
    }
}
