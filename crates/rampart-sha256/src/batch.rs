// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hashing of independent messages.
//!
//! Each message gets its own state and schedule; only the constant tables
//! are shared, and those are `const`. With the `parallel` feature the
//! messages are spread over rayon's thread pool.

use alloc::vec::Vec;

use rampart_sha256_core::{Digest, Sha256Error, sha256};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Hashes every message, returning digests in input order.
///
/// # Example
///
/// ```
/// use rampart_sha256::{hash, hash_many};
///
/// let messages = [b"hello".to_vec(), b"world".to_vec()];
/// let digests = hash_many(&messages);
///
/// assert_eq!(digests.len(), 2);
/// assert_eq!(digests[1], hash(b"world"));
/// ```
#[cfg(feature = "parallel")]
pub fn hash_many<M>(messages: &[M]) -> Vec<Result<Digest, Sha256Error>>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .par_iter()
        .map(|message| sha256(message.as_ref()))
        .collect()
}

/// Hashes every message, returning digests in input order.
///
/// # Example
///
/// ```
/// use rampart_sha256::{hash, hash_many};
///
/// let messages = [b"hello".to_vec(), b"world".to_vec()];
/// let digests = hash_many(&messages);
///
/// assert_eq!(digests.len(), 2);
/// assert_eq!(digests[1], hash(b"world"));
/// ```
#[cfg(not(feature = "parallel"))]
pub fn hash_many<M>(messages: &[M]) -> Vec<Result<Digest, Sha256Error>>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .iter()
        .map(|message| sha256(message.as_ref()))
        .collect()
}
