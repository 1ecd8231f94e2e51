//! 32-bit word primitives shared by the schedule and the round function.

use super::{Error, Result};

/// Sum any number of words modulo 2^32.
#[inline]
#[must_use]
pub fn add32(terms: &[u32]) -> u32 {
    terms.iter().fold(0u32, |acc, term| acc.wrapping_add(*term))
}

/// Circular right rotation by `amount` bits.
///
/// Only `1..32` is accepted; a rotation of zero or a full word is a caller bug.
pub fn rotate_right32(word: u32, amount: u32) -> Result<u32> {
    if amount == 0 || amount >= u32::BITS {
        return Err(Error::InvalidRotation { amount });
    }
    Ok(word.rotate_right(amount))
}

/// σ0, used when expanding the message schedule.
#[inline(always)]
#[must_use]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1, used when expanding the message schedule.
#[inline(always)]
#[must_use]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Σ0, applied to register `a`.
#[inline(always)]
#[must_use]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1, applied to register `e`.
#[inline(always)]
#[must_use]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Bitwise choice: `x` selects between `y` and `z`.
#[inline(always)]
#[must_use]
pub fn choice(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// Bitwise majority of three words.
#[inline(always)]
#[must_use]
pub fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}
