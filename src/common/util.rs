//! Auxiliary functions.

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::WORD_BIT_SIZE;

use crate::defs::Error;

/// Rounds precision `p` upwards to the word size.
pub fn round_p(p: usize) -> usize {
    ((p.saturating_add(WORD_BIT_SIZE - 1)) / WORD_BIT_SIZE) * WORD_BIT_SIZE
}

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Smallest integer not less than `n / 2`.
pub fn ceil_half(n: isize) -> isize {
    -((-n).div_euclid(2))
}

/// Largest integer not greater than `n / 2`.
pub fn floor_half(n: isize) -> isize {
    n.div_euclid(2)
}

/// Compares two numbers. Returns None if any of them is NaN.
pub fn ord(a: &BigFloat, b: &BigFloat) -> Option<Ordering> {
    a.cmp(b).map(|c| c.cmp(&0))
}

/// Exponent of a finite number, or 0 for zero, inf and NaN.
pub fn exponent(x: &BigFloat) -> isize {
    x.exponent().map(|e| e as isize).unwrap_or(0)
}

/// Number of bits of the mantissa of a finite number.
pub fn mantissa_len(x: &BigFloat) -> usize {
    x.mantissa_max_bit_len().unwrap_or(0)
}

/// Returns `x` unless it carries an error of the underlying operation.
pub fn checked(x: BigFloat) -> Result<BigFloat, Error> {
    match x.err() {
        Some(e) => Err(e.into()),
        None => Ok(x),
    }
}

/// Returns the ordering for a sign: `Less` if `neg` is true, `Greater` otherwise.
pub fn sign_ord(neg: bool) -> Ordering {
    if neg {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
