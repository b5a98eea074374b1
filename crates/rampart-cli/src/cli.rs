// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Argument definitions and the hashing loop behind `rampart-sha256sum`.

use std::io::{Read, Write};

use clap::Parser;
use rampart_sha256::padding::padding_len;
use rampart_sha256::{BLOCK_LEN, Digest, hash, init};
use rampart_util::decode_hex;
use tracing::{debug, info, warn};

use crate::error::CliError;

/// Print SHA-256 digests.
///
/// Each MESSAGE argument is hashed as its UTF-8 bytes (or decoded from hex
/// with `--hex`). Without messages, standard input is hashed.
#[derive(Parser, Debug)]
#[command(name = "rampart-sha256sum")]
#[command(version)]
pub struct Args {
    /// Messages to hash
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// Treat each MESSAGE as hex-encoded bytes
    #[arg(long)]
    pub hex: bool,

    /// Also hash standard input (implied when no MESSAGE is given)
    #[arg(long)]
    pub stdin: bool,

    /// Expected digest (64 hex characters); exit with status 1 on mismatch
    #[arg(long, value_name = "DIGEST")]
    pub check: Option<String>,

    /// Read size when streaming standard input
    #[arg(long, value_name = "BYTES", default_value_t = 8192,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub chunk_size: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Result of the optional `--check` comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// No expected digest was given
    Unchecked,
    /// Every input matched the expected digest
    Matched,
    /// At least one input did not match
    Mismatched,
}

fn block_count(len: u64) -> u64 {
    (len + padding_len(len) as u64) / BLOCK_LEN as u64
}

fn hash_stdin<R: Read>(mut input: R, chunk_size: usize) -> Result<Digest, CliError> {
    let mut ctx = init();
    let mut chunk = vec![0u8; chunk_size];

    loop {
        let n = match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        ctx.update(&chunk[..n])?;
    }

    debug!(
        label = "-",
        bytes = ctx.bytes_processed(),
        blocks = block_count(ctx.bytes_processed()),
        "hashed standard input"
    );

    Ok(ctx.finalize())
}

fn hash_argument(message: &str, as_hex: bool) -> Result<Digest, CliError> {
    let decoded;
    let bytes: &[u8] = if as_hex {
        decoded = decode_hex(message).map_err(rampart_sha256::Sha256Error::from)?;
        &decoded
    } else {
        message.as_bytes()
    };

    let digest = hash(bytes)?;

    debug!(
        label = message,
        bytes = bytes.len(),
        blocks = block_count(bytes.len() as u64),
        "hashed argument"
    );

    Ok(digest)
}

/// Hashes every requested input and writes `<hex>  <label>` lines to `out`.
pub fn run<R: Read, W: Write>(args: &Args, stdin: R, mut out: W) -> Result<CheckStatus, CliError> {
    // Validate --check before doing any work
    let expected = args.check.as_deref().map(Digest::from_hex).transpose()?;

    let mut results: Vec<(String, Digest)> = Vec::with_capacity(args.messages.len() + 1);

    for message in &args.messages {
        results.push((message.clone(), hash_argument(message, args.hex)?));
    }

    if args.stdin || args.messages.is_empty() {
        results.push(("-".to_string(), hash_stdin(stdin, args.chunk_size as usize)?));
    }

    info!(inputs = results.len(), "hashing complete");

    let mut status = match expected {
        Some(_) => CheckStatus::Matched,
        None => CheckStatus::Unchecked,
    };

    for (label, digest) in &results {
        writeln!(out, "{digest}  {label}")?;

        if let Some(expected) = &expected {
            if !digest.verify(expected.as_bytes()) {
                warn!(label = %label, expected = %expected, actual = %digest, "digest mismatch");
                status = CheckStatus::Mismatched;
            }
        }
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const EMPTY_HEX: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn run_with(argv: &[&str], stdin: &[u8]) -> (Result<CheckStatus, CliError>, String) {
        let args = Args::try_parse_from(argv).expect("Failed to parse args");
        let mut out = Vec::new();
        let result = run(&args, stdin, &mut out);
        (result, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn test_hashes_message_arguments() {
        let (result, out) = run_with(&["rampart-sha256sum", "abc", ""], b"ignored");

        assert_eq!(result.expect("run failed"), CheckStatus::Unchecked);
        assert_eq!(out, format!("{ABC_HEX}  abc\n{EMPTY_HEX}  \n"));
    }

    #[test]
    fn test_reads_stdin_without_messages() {
        let (result, out) = run_with(&["rampart-sha256sum", "--chunk-size", "1"], b"abc");

        assert_eq!(result.expect("run failed"), CheckStatus::Unchecked);
        assert_eq!(out, format!("{ABC_HEX}  -\n"));
    }

    #[test]
    fn test_hex_arguments_are_decoded() {
        let (result, out) = run_with(&["rampart-sha256sum", "--hex", "616263"], b"");

        assert!(result.is_ok());
        assert_eq!(out, format!("{ABC_HEX}  616263\n"));
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        let (result, out) = run_with(&["rampart-sha256sum", "--hex", "61626"], b"");

        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_check_match_and_mismatch() {
        let (matched, _) = run_with(&["rampart-sha256sum", "--check", ABC_HEX, "abc"], b"");
        assert_eq!(matched.expect("run failed"), CheckStatus::Matched);

        let (mismatched, out) =
            run_with(&["rampart-sha256sum", "--check", EMPTY_HEX, "abc"], b"");
        assert_eq!(mismatched.expect("run failed"), CheckStatus::Mismatched);
        assert_eq!(out, format!("{ABC_HEX}  abc\n"));
    }

    #[test]
    fn test_malformed_check_digest_is_rejected() {
        let (result, out) = run_with(&["rampart-sha256sum", "--check", "abcd", "abc"], b"");

        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        assert!(Args::try_parse_from(["rampart-sha256sum", "--chunk-size", "0"]).is_err());
    }

    #[test]
    fn test_block_count() {
        assert_eq!(block_count(0), 1);
        assert_eq!(block_count(55), 1);
        assert_eq!(block_count(56), 2);
        assert_eq!(block_count(64), 2);
    }
}
