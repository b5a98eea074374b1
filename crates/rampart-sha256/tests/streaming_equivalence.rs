// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use rampart_sha256::{Sha256, finalize, hash, init, update};

proptest! {
    #[test]
    fn fixed_chunk_size_matches_one_shot(
        message in proptest::collection::vec(any::<u8>(), 0..1024),
        chunk in 1usize..200,
    ) {
        let mut ctx = init();
        for piece in message.chunks(chunk) {
            update(&mut ctx, piece).expect("Failed to update(..)");
        }

        prop_assert_eq!(finalize(ctx), hash(&message).expect("Failed to hash(..)"));
    }

    #[test]
    fn arbitrary_chunk_sizes_match_one_shot(
        chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..130), 0..12),
    ) {
        let mut ctx = Sha256::new();
        let mut whole = Vec::new();

        for chunk in &chunks {
            ctx.update(chunk).expect("Failed to update(..)");
            whole.extend_from_slice(chunk);
        }

        prop_assert_eq!(ctx.bytes_processed(), whole.len() as u64);
        prop_assert_eq!(ctx.finalize(), hash(&whole).expect("Failed to hash(..)"));
    }
}
