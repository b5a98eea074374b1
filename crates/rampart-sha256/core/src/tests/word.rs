// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word::{add32, bsig0, bsig1, ch, maj, rotr32, shr32, ssig0, ssig1};

const TEST_VALUES: [u32; 5] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
];

#[test]
fn add32_wraps_modulo_2_32() {
    assert_eq!(add32([0xFFFF_FFFF, 1]), 0);
    assert_eq!(add32([0x8000_0000, 0x8000_0000, 5]), 5);
    assert_eq!(add32([u32::MAX; 5]), u32::MAX.wrapping_mul(5));
}

#[test]
fn add32_matches_masked_wide_sum() {
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let wide = (x as u64 + y as u64 + z as u64) & 0xFFFF_FFFF;
                assert_eq!(add32([x, y, z]) as u64, wide);
            }
        }
    }
}

#[test]
fn add32_empty_and_single() {
    assert_eq!(add32([]), 0);
    assert_eq!(add32([0xdead_beef]), 0xdead_beef);
}

#[test]
fn rotr32_matches_reference() {
    for &x in &TEST_VALUES {
        for n in 1..32 {
            let expected = (x >> n) | (x << (32 - n));
            assert_eq!(rotr32(x, n), expected, "ROTR^{n}({x:#010x})");
        }
        assert_eq!(rotr32(x, 0), x);
    }
}

#[test]
fn shr32_does_not_wrap() {
    assert_eq!(shr32(0x8000_0001, 1), 0x4000_0000);
    assert_eq!(shr32(0xFFFF_FFFF, 31), 1);
    assert_eq!(shr32(0x1234_5678, 0), 0x1234_5678);
}

#[test]
fn ch_matches_reference() {
    // Ch(x, y, z) = (x & y) ^ (!x & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (!x & z);

                assert_eq!(
                    ch(x, y, z),
                    expected,
                    "Ch mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn ch_selects_by_x() {
    assert_eq!(ch(0xFFFF_FFFF, 0x1234_5678, 0x9abc_def0), 0x1234_5678);
    assert_eq!(ch(0, 0x1234_5678, 0x9abc_def0), 0x9abc_def0);
}

#[test]
fn maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (x & z) ^ (y & z);

                assert_eq!(
                    maj(x, y, z),
                    expected,
                    "Maj mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn sigma_functions_match_reference() {
    for &x in &TEST_VALUES {
        assert_eq!(
            bsig0(x),
            x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
        );
        assert_eq!(
            bsig1(x),
            x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
        );
        assert_eq!(ssig0(x), x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3));
        assert_eq!(
            ssig1(x),
            x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
        );
    }
}

#[test]
fn sigma_functions_known_values() {
    // Values cross-checked against the FIPS 180-4 "abc" walkthrough inputs
    assert_eq!(ssig0(0x6162_6380), 0x940e_90ef);
    assert_eq!(ssig1(0x0000_0018), 0x000f_0000);
    assert_eq!(bsig0(0x6a09_e667), 0xce20_b47e);
    assert_eq!(bsig1(0x510e_527f), 0x3587_272b);
}
