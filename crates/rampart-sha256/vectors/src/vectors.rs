// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{HashVector, Message};

/// FIPS 180-4 / RFC 6234 examples
pub const FIPS_VECTORS: &[HashVector] = &[
    HashVector {
        name: "empty",
        message: Message::Bytes(b""),
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    HashVector {
        name: "abc",
        message: Message::Bytes(b"abc"),
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    // 448 bits: padding and length spill into a second block
    HashVector {
        name: "abcdbcde...nopq",
        message: Message::Bytes(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    // 896 bits: state chaining across two full blocks
    HashVector {
        name: "abcdefgh...nopqrstu",
        message: Message::Bytes(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        ),
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    HashVector {
        name: "quick brown fox",
        message: Message::Bytes(b"The quick brown fox jumps over the lazy dog"),
        digest: "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    },
];

/// NIST CAVP byte-oriented short messages
pub const CAVP_SHORT_VECTORS: &[HashVector] = &[
    HashVector {
        name: "cavp len=8",
        message: Message::Hex("d3"),
        digest: "28969cdfa74a12c82f3bad960b0b000aca2ac329deea5c2328ebc6f2ba9802c1",
    },
    HashVector {
        name: "cavp len=16",
        message: Message::Hex("11af"),
        digest: "5ca7133fa735326081558ac312c620eeca9970d1e70a4b95533d956f072d1f98",
    },
];

/// Lengths around the 55/56 and 119/120 byte padding boundaries
pub const BOUNDARY_VECTORS: &[HashVector] = &[
    // 55 bytes: 0x80 and the length field still fit one block
    HashVector {
        name: "a x 55",
        message: Message::Repeat { pattern: b"a", count: 55 },
        digest: "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318",
    },
    // 56 bytes: length field forces a second block
    HashVector {
        name: "a x 56",
        message: Message::Repeat { pattern: b"a", count: 56 },
        digest: "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a",
    },
    HashVector {
        name: "a x 63",
        message: Message::Repeat { pattern: b"a", count: 63 },
        digest: "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34",
    },
    // 64 bytes: a whole block of message, a whole block of padding
    HashVector {
        name: "a x 64",
        message: Message::Repeat { pattern: b"a", count: 64 },
        digest: "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb",
    },
    HashVector {
        name: "a x 119",
        message: Message::Repeat { pattern: b"a", count: 119 },
        digest: "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb",
    },
    HashVector {
        name: "a x 120",
        message: Message::Repeat { pattern: b"a", count: 120 },
        digest: "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c",
    },
];

/// FIPS 180-4 long message: one million 'a'
pub const MILLION_A: HashVector = HashVector {
    name: "a x 1000000",
    message: Message::Repeat {
        pattern: b"a",
        count: 1_000_000,
    },
    digest: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
};
