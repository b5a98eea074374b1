// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! 32-bit word primitives and the SHA-256 logical functions.
//!
//! All arithmetic is modulo 2^32 via the `wrapping_*` operations of `u32`;
//! nothing here is promoted to a wider type.

/// Sum of all operands modulo 2^32.
///
/// ```
/// use rampart_sha256_core::word::add32;
///
/// assert_eq!(add32([u32::MAX, 2]), 1);
/// assert_eq!(add32([1, 2, 3, 4, 5]), 15);
/// ```
#[inline(always)]
pub fn add32<const N: usize>(operands: [u32; N]) -> u32 {
    operands.iter().fold(0u32, |acc, x| acc.wrapping_add(*x))
}

/// ROTR^n(x): right-rotate within a 32-bit word, `0 <= n < 32`
#[inline(always)]
pub fn rotr32(x: u32, n: u32) -> u32 {
    debug_assert!(n < 32, "rotation out of range: {n}");
    x.rotate_right(n)
}

/// SHR^n(x): logical right shift, `0 <= n < 32`
#[inline(always)]
pub fn shr32(x: u32, n: u32) -> u32 {
    debug_assert!(n < 32, "shift out of range: {n}");
    x >> n
}

/// Ch(x,y,z) = (x ∧ y) ⊕ (¬x ∧ z) per FIPS 180-4 Section 4.1.2
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Maj(x,y,z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z) per FIPS 180-4 Section 4.1.2
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0(x) = ROTR^2(x) ⊕ ROTR^13(x) ⊕ ROTR^22(x)
#[inline(always)]
pub fn bsig0(x: u32) -> u32 {
    rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

/// Σ1(x) = ROTR^6(x) ⊕ ROTR^11(x) ⊕ ROTR^25(x)
#[inline(always)]
pub fn bsig1(x: u32) -> u32 {
    rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

/// σ0(x) = ROTR^7(x) ⊕ ROTR^18(x) ⊕ SHR^3(x)
#[inline(always)]
pub fn ssig0(x: u32) -> u32 {
    rotr32(x, 7) ^ rotr32(x, 18) ^ shr32(x, 3)
}

/// σ1(x) = ROTR^17(x) ⊕ ROTR^19(x) ⊕ SHR^10(x)
#[inline(always)]
pub fn ssig1(x: u32) -> u32 {
    rotr32(x, 17) ^ rotr32(x, 19) ^ shr32(x, 10)
}
