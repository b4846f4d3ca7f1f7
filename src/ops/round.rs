//! Rounding to an arbitrary number of bits and the test of roundability.

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::Exponent;
use astro_float_num::RoundingMode;
use astro_float_num::EXPONENT_MAX;
use astro_float_num::EXPONENT_MIN;
use astro_float_num::WORD_BIT_SIZE;

use crate::common::util::checked;
use crate::common::util::exponent;
use crate::common::util::mantissa_len;
use crate::common::util::ord;
use crate::ctx::ExponentRange;
use crate::defs::is_nearest;
use crate::defs::Error;
use crate::ops::err::ErrorBound;

/// Rounds `x` to `p` bits using the rounding mode `rm`.
/// Returns the rounded value and its ternary value with respect to `x`.
///
/// ## Errors
///
///  - MemoryAllocation: failed to allocate memory.
///  - InvalidArgument: the precision is zero.
pub fn round_to_bits(
    x: &BigFloat,
    p: usize,
    rm: RoundingMode,
) -> Result<(BigFloat, Ordering), Error> {
    if p == 0 || p > EXPONENT_MAX as usize {
        return Err(Error::InvalidArgument);
    }

    if x.is_zero() || x.is_nan() || x.is_inf() {
        return Ok((x.clone(), Ordering::Equal));
    }

    let e = exponent(x);

    // make the p most significant bits the integer part
    let mut y = x.clone();
    y.set_exponent(p as Exponent);
    let mut r = checked(y.round(0, rm))?;

    let e_new = e + exponent(&r) - p as isize;
    if e_new > EXPONENT_MAX as isize {
        return Ok(ExponentRange::full().overflow(x.is_negative(), p, rm));
    }

    r.set_exponent(e_new as Exponent);
    if mantissa_len(&r) > p {
        r.set_precision(p, RoundingMode::ToZero)?;
    }

    let t = ord(&r, x).unwrap_or(Ordering::Equal);

    Ok((r, t))
}

/// Returns true if any number within the distance `err` from `w` rounds to the same value with
/// precision `p` using the rounding mode `rm`.
///
/// For rounding to nearest the test is performed with precision `p + 1`: the interval must not
/// contain numbers representable with `p` bits, nor the midpoints between them.
pub fn can_round(w: &BigFloat, err: ErrorBound, p: usize, rm: RoundingMode) -> bool {
    let k = match err {
        ErrorBound::Exact => return true,
        ErrorBound::Ulp(k) => k,
    };

    if w.is_zero() || w.is_nan() || w.is_inf() {
        return false;
    }

    let wp = mantissa_len(w) as isize;
    if k >= wp - 1 {
        return false;
    }

    let q = if is_nearest(rm) { p + 1 } else { p };

    // the test does not depend on the exponent of w: it is performed on w moved to [1/2, 1)
    let mut ws = w.clone();
    ws.set_exponent(0);

    // u = 2^(k - wp + 1) bounds the error of ws, an error far below the last bit of ws is
    // replaced with 2^-(wp + WORD_BIT_SIZE)
    let u_exp = (k - wp + 1).max(-wp - WORD_BIT_SIZE as isize);
    let mut u = BigFloat::from_word(1, WORD_BIT_SIZE);
    u.set_exponent(u_exp as Exponent);

    let lo = ws.sub_full_prec(&u);
    let hi = ws.add_full_prec(&u);

    if lo.is_zero() || hi.is_zero() || lo.is_negative() != hi.is_negative() {
        return false;
    }

    let (small, big) = if lo.is_negative() { (hi.abs(), lo.abs()) } else { (lo, hi) };

    // largest number with q bits not above big
    let t = match round_to_bits(&big, q, RoundingMode::ToZero) {
        Ok((t, _)) => t,
        Err(_) => return false,
    };

    ord(&t, &small) == Some(Ordering::Less)
}

/// Moves `x` in the direction `dir` by one unit in the last place of a precision one word larger
/// than the precision of `x`. The result lies strictly between `x` and its neighbour with the
/// precision of `x`, which rounds as any other number between the two.
///
/// `x` is returned as is if the result falls below the range of exponents.
pub fn nudge(x: &BigFloat, dir: Ordering) -> BigFloat {
    if x.is_zero() || x.is_nan() || x.is_inf() || dir == Ordering::Equal {
        return x.clone();
    }

    let e = exponent(x);
    let q = (mantissa_len(x) + WORD_BIT_SIZE) as isize;

    // step in [1/2, 1), then restore the exponent
    let mut xs = x.clone();
    xs.set_exponent(0);

    let mut u = BigFloat::from_word(1, WORD_BIT_SIZE);
    u.set_exponent((1 - q) as Exponent);

    let mut r = if dir == Ordering::Greater {
        xs.add_full_prec(&u)
    } else {
        xs.sub_full_prec(&u)
    };

    let e_r = exponent(&r) + e;
    if e_r < EXPONENT_MIN as isize {
        return x.clone();
    }

    r.set_exponent(e_r as Exponent);
    r
}

#[cfg(test)]
mod tests {

    use super::*;

    fn bf(f: f64) -> BigFloat {
        BigFloat::from_f64(f, 64)
    }

    #[test]
    fn test_round_to_bits() {
        // 0.1011b rounded to 2 bits
        let x = bf(0.6875);

        let (r, t) = round_to_bits(&x, 2, RoundingMode::ToEven).unwrap();
        assert_eq!(r, bf(0.75));
        assert_eq!(t, Ordering::Greater);

        let (r, t) = round_to_bits(&x, 2, RoundingMode::Down).unwrap();
        assert_eq!(r, bf(0.5));
        assert_eq!(t, Ordering::Less);

        let (r, t) = round_to_bits(&x, 3, RoundingMode::ToZero).unwrap();
        assert_eq!(r, bf(0.625));
        assert_eq!(t, Ordering::Less);

        let (r, t) = round_to_bits(&x, 3, RoundingMode::FromZero).unwrap();
        assert_eq!(r, bf(0.75));
        assert_eq!(t, Ordering::Greater);

        // negative numbers
        let x = bf(-0.6875);
        let (r, t) = round_to_bits(&x, 2, RoundingMode::Up).unwrap();
        assert_eq!(r, bf(-0.5));
        assert_eq!(t, Ordering::Greater);
        let (r, t) = round_to_bits(&x, 2, RoundingMode::Down).unwrap();
        assert_eq!(r, bf(-0.75));
        assert_eq!(t, Ordering::Less);

        // carry into the next binade
        let (r, t) = round_to_bits(&bf(0.9375), 3, RoundingMode::Up).unwrap();
        assert_eq!(r, bf(1.0));
        assert_eq!(r.exponent(), Some(1));
        assert_eq!(t, Ordering::Greater);

        // ties to even
        let (r, _) = round_to_bits(&bf(0.625), 2, RoundingMode::ToEven).unwrap();
        assert_eq!(r, bf(0.5));
        let (r, _) = round_to_bits(&bf(0.875), 2, RoundingMode::ToEven).unwrap();
        assert_eq!(r, bf(1.0));

        // exact
        let (r, t) = round_to_bits(&bf(0.75), 2, RoundingMode::ToEven).unwrap();
        assert_eq!(r, bf(0.75));
        assert_eq!(t, Ordering::Equal);

        // large precision
        let (r, t) = round_to_bits(&bf(0.6875), 1000, RoundingMode::Down).unwrap();
        assert_eq!(r, bf(0.6875));
        assert_eq!(t, Ordering::Equal);

        // special values
        let (r, t) = round_to_bits(&astro_float_num::INF_NEG, 10, RoundingMode::Down).unwrap();
        assert!(r.is_inf_neg());
        assert_eq!(t, Ordering::Equal);

        assert!(round_to_bits(&x, 0, RoundingMode::Down).is_err());
    }

    #[test]
    fn test_can_round() {
        let p = 128;
        let mut cc = astro_float_num::Consts::new().unwrap();
        let pi = cc.pi(p, RoundingMode::ToEven);

        assert!(can_round(&pi, ErrorBound::Ulp(0), 53, RoundingMode::ToEven));
        assert!(can_round(&pi, ErrorBound::Ulp(10), 53, RoundingMode::Up));
        assert!(!can_round(&pi, ErrorBound::Ulp(120), 53, RoundingMode::Up));
        assert!(!can_round(&pi, ErrorBound::Ulp(0), 127, RoundingMode::ToEven));

        // a representable number can't be rounded unless exact
        let one = BigFloat::from_word(1, p);
        assert!(!can_round(&one, ErrorBound::Ulp(0), 53, RoundingMode::ToZero));
        assert!(can_round(&one, ErrorBound::Exact, 53, RoundingMode::ToZero));

        // a midpoint can't be rounded to nearest
        let mid = bf(0.625);
        assert!(!can_round(&mid, ErrorBound::Ulp(-10), 2, RoundingMode::ToEven));
        assert!(can_round(&mid, ErrorBound::Ulp(-10), 2, RoundingMode::Down));
        assert!(can_round(&mid, ErrorBound::Ulp(10), 1, RoundingMode::Down));

        assert!(!can_round(&BigFloat::new(p), ErrorBound::Ulp(0), 53, RoundingMode::ToZero));
    }

    #[test]
    fn test_nudge() {
        let x = BigFloat::from_word(1, 64);

        let y = nudge(&x, Ordering::Greater);
        assert_eq!(ord(&y, &x), Some(Ordering::Greater));
        let (r, t) = round_to_bits(&y, 64, RoundingMode::ToZero).unwrap();
        assert_eq!(r, x);
        assert_eq!(t, Ordering::Less);

        let y = nudge(&x, Ordering::Less);
        assert_eq!(ord(&y, &x), Some(Ordering::Less));
        let (r, t) = round_to_bits(&y, 64, RoundingMode::Up).unwrap();
        assert_eq!(r, x);
        assert_eq!(t, Ordering::Greater);
        let (r, _) = round_to_bits(&y, 64, RoundingMode::ToEven).unwrap();
        assert_eq!(r, x);

        assert_eq!(nudge(&x, Ordering::Equal), x);
    }

    #[test]
    fn test_extreme_exponents() {
        let mut cc = astro_float_num::Consts::new().unwrap();
        let p = 128;

        for e in [EXPONENT_MIN + 3, EXPONENT_MAX - 3] {
            let mut pi = cc.pi(p, RoundingMode::ToEven);
            pi.set_exponent(e);
            assert!(can_round(&pi, ErrorBound::Ulp(0), 53, RoundingMode::ToEven));
            assert!(!can_round(&pi, ErrorBound::Ulp(120), 53, RoundingMode::Up));

            // an error far below the last bit
            assert!(can_round(&pi, ErrorBound::Ulp(-(1 << 40)), 53, RoundingMode::Down));

            let mut x = BigFloat::from_word(3, 64);
            x.set_exponent(e);
            assert!(!can_round(&x, ErrorBound::Ulp(-(1 << 40)), 53, RoundingMode::Down));

            let y = nudge(&x, Ordering::Less);
            assert_eq!(ord(&y, &x), Some(Ordering::Less));
            assert_eq!(y.exponent(), Some(e));
            let (r, t) = round_to_bits(&y, 64, RoundingMode::Up).unwrap();
            assert_eq!(r, x);
            assert_eq!(t, Ordering::Greater);

            let y = nudge(&x, Ordering::Greater);
            let (r, t) = round_to_bits(&y, 64, RoundingMode::Down).unwrap();
            assert_eq!(r, x);
            assert_eq!(t, Ordering::Less);
        }

        // the smallest normal number moved toward zero is out of range
        let mut x = BigFloat::from_word(1, 64);
        x.set_exponent(EXPONENT_MIN);
        assert_eq!(nudge(&x, Ordering::Less), x);
    }
}
