// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;

use rampart_sha256::Sha256Error;
use thiserror::Error;

/// Command-line failure
#[derive(Error, Debug)]
pub enum CliError {
    /// Input rejected before hashing
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Sha256Error),

    /// Reading standard input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
