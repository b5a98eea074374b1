// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rampart-sha256sum`: print SHA-256 digests of messages or standard input.

mod cli;
mod error;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Args, CheckStatus, run};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run(&args, io::stdin().lock(), &mut out);
    let _ = out.flush();

    match result {
        Ok(CheckStatus::Unchecked | CheckStatus::Matched) => ExitCode::SUCCESS,
        Ok(CheckStatus::Mismatched) => ExitCode::from(1),
        Err(e) => {
            eprintln!("rampart-sha256sum: {e}");
            ExitCode::from(2)
        }
    }
}
