//! Correctly rounded real functions used for the special values of complex functions.

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::Consts;
use astro_float_num::RoundingMode;
use astro_float_num::WORD_BIT_SIZE;

use crate::common::util::checked;
use crate::common::util::exponent;
use crate::common::util::mantissa_len;
use crate::common::util::round_p;
use crate::common::util::sign_ord;
use crate::ctx::ExponentRange;
use crate::defs::Error;
use crate::ops::err::ErrorBound;
use crate::ops::round::can_round;
use crate::ops::round::nudge;
use crate::ops::round::round_to_bits;

const RM: RoundingMode = RoundingMode::ToEven;

// Evaluates `f` with increasing precision until the result can be rounded to `p` bits.
// `f` must not return exact nonzero values.
fn ziv<F>(p: usize, rm: RoundingMode, mut f: F) -> Result<(BigFloat, Ordering), Error>
where
    F: FnMut(usize) -> BigFloat,
{
    let mut wp = round_p(p) + WORD_BIT_SIZE;

    loop {
        let v = checked(f(wp))?;

        if v.is_zero() || v.is_inf() || v.is_nan() {
            return Ok((v, Ordering::Equal));
        }

        if can_round(&v, ErrorBound::Ulp(1), p, rm) {
            return round_to_bits(&v, p, rm);
        }

        log::trace!("real function retry at precision {}", wp);

        wp = round_p(wp + wp / 2);
    }
}

// Rounds `f(x)` for a function with `f(x) = x + d`, `|d| < |x|^3`, and `d` of the sign of `x` if
// `away` is true, or of the opposite sign otherwise. Returns None if `d` can reach the last bit
// of `x` at the precision of the evaluation.
fn round_tiny(
    x: &BigFloat,
    away: bool,
    p: usize,
    rm: RoundingMode,
) -> Result<Option<(BigFloat, Ordering)>, Error> {
    let q = round_p(p).max(mantissa_len(x)) + WORD_BIT_SIZE;

    if 2 * exponent(x) + q as isize + 2 >= 0 {
        return Ok(None);
    }

    // moved to [1/2, 1) so that the neighbour of the smallest normal number is reachable
    let mut w = x.clone();
    w.set_precision(q, RM)?;
    w.set_exponent(0);

    let dir = sign_ord(x.is_negative() == away);
    let (r, t) = round_to_bits(&nudge(&w, dir), p, rm)?;

    Ok(Some(ExponentRange::full().check_range_scaled(r, exponent(x), p, t, rm)))
}

/// Computes `pi / 2^k`, negated if `neg` is true, rounded to `p` bits using the rounding mode `rm`.
pub fn pi_shifted(
    k: isize,
    neg: bool,
    p: usize,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<(BigFloat, Ordering), Error> {
    ziv(p, rm, |wp| {
        let mut v = cc.pi(wp, RM);
        v.set_exponent((exponent(&v) - k) as astro_float_num::Exponent);
        if neg {
            v.inv_sign();
        }
        v
    })
}

/// Computes `pi / 2` with the sign given by `neg`.
pub fn half_pi(
    neg: bool,
    p: usize,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<(BigFloat, Ordering), Error> {
    pi_shifted(1, neg, p, rm, cc)
}

/// Computes the arcsine of `x` with `|x| <= 1`.
pub fn asin(
    x: &BigFloat,
    p: usize,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<(BigFloat, Ordering), Error> {
    if x.is_zero() {
        return round_to_bits(x, p, rm);
    }
    if let Some(ret) = round_tiny(x, true, p, rm)? {
        return Ok(ret);
    }
    ziv(p, rm, |wp| x.asin(wp, RM, cc))
}

/// Computes the inverse hyperbolic cosine of `x` with `x > 1`, negated if `neg` is true.
pub fn acosh(
    x: &BigFloat,
    neg: bool,
    p: usize,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<(BigFloat, Ordering), Error> {
    ziv(p, rm, |wp| {
        let mut v = x.acosh(wp, RM, cc);
        if neg {
            v.inv_sign();
        }
        v
    })
}

/// Computes the inverse hyperbolic sine of `x`.
pub fn asinh(
    x: &BigFloat,
    p: usize,
    rm: RoundingMode,
    cc: &mut Consts,
) -> Result<(BigFloat, Ordering), Error> {
    if x.is_zero() || x.is_inf() {
        return round_to_bits(x, p, rm);
    }
    if let Some(ret) = round_tiny(x, false, p, rm)? {
        return Ok(ret);
    }
    ziv(p, rm, |wp| x.asinh(wp, RM, cc))
}
