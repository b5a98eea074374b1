// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression function per FIPS 180-4 Section 6.2.2 steps 2-4

use zeroize::Zeroize;

use crate::consts::{K256, STATE_WORDS};
use crate::padding::Block;
use crate::schedule::MessageSchedule;
use crate::word::{add32, bsig0, bsig1, ch, maj};

/// Runs 64 rounds over `schedule` and folds the result into `h`.
///
/// Blocks must be compressed in message order: each call consumes the
/// state left by the previous one.
pub fn compress(h: &mut [u32; STATE_WORDS], schedule: &MessageSchedule) {
    // Working variables a..h
    let mut wv = *h;

    for (k, w) in K256.iter().zip(schedule.words()) {
        let [a, b, c, d, e, f, g, hh] = wv;

        let t1 = add32([hh, bsig1(e), ch(e, f, g), *k, *w]);
        let t2 = add32([bsig0(a), maj(a, b, c)]);

        // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
        wv = [add32([t1, t2]), a, b, c, add32([d, t1]), e, f, g];
    }

    for (hi, vi) in h.iter_mut().zip(wv.iter()) {
        *hi = hi.wrapping_add(*vi);
    }

    wv.zeroize();
}

/// Schedules and compresses a single block into `h`.
///
/// No padding is applied; `block` must already be part of a padded message.
pub fn compress_block(h: &mut [u32; STATE_WORDS], block: &Block) {
    let schedule = MessageSchedule::from_block(block);
    compress(h, &schedule);
}
