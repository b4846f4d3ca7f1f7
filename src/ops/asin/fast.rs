//! Approximations of the arcsine valid in particular regions of the complex plane.
//!
//! Each function returns `Attempt::Retry` if the region does not contain the argument or the
//! approximation is not accurate enough at the given precision.
//! The argument is expected to have a negative imaginary part.

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::Consts;
use astro_float_num::RoundingMode;
use astro_float_num::Exponent;
use astro_float_num::Word;
use astro_float_num::WORD_BIT_SIZE;

use crate::common::consts::ONE;
use crate::common::util::ceil_half;
use crate::common::util::checked;
use crate::common::util::exponent;
use crate::common::util::log2_ceil;
use crate::common::util::mantissa_len;
use crate::common::util::ord;
use crate::common::util::sign_ord;
use crate::defs::Error;
use crate::num::BigComplex;
use crate::ops::arith;
use crate::ops::asin::Attempt;
use crate::ops::asin::Candidate;
use crate::ops::err::ErrorBound;
use crate::ops::round::nudge;

const RM: RoundingMode = RoundingMode::ToEven;

fn to_precision(x: &BigFloat, p: usize) -> Result<BigFloat, Error> {
    let mut ret = x.clone();
    ret.set_precision(p, RM)?;
    Ok(ret)
}

/// Arcsine of `+-1 + iy` for a tiny `y`:
/// `asin(+-1 + iy) = +-(pi/2 - sqrt(|y|)) - i*sqrt(|y|) + O(|y|^(3/2))` for `y < 0`.
pub(super) fn asin_near_one(z: &BigComplex, p: usize, cc: &mut Consts) -> Result<Attempt, Error> {
    let (x, y) = (z.re(), z.im());

    if ord(&x.abs(), &ONE) != Some(Ordering::Equal) {
        return Ok(Attempt::Retry);
    }

    let pi = p as isize;

    // the terms of order |y|^(3/2) are below 2^trunc_exp
    let trunc_exp = ceil_half(3 * exponent(y)) - 3;

    let sv = checked(y.abs().sqrt(p, RM))?;

    let mut half_pi = cc.pi(p, RM);
    half_pi.set_exponent(1);

    let mut re = checked(half_pi.sub(&sv, p, RM))?;
    let e_re = exponent(&re);
    if re.is_zero() || trunc_exp > e_re - pi {
        return Ok(Attempt::Retry);
    }

    let err_re = ErrorBound::Ulp(1).plus(ErrorBound::Ulp(trunc_exp - e_re + pi));
    if x.is_negative() {
        re.inv_sign();
    }

    let e_sv = exponent(&sv);
    let mut im = sv;
    if y.is_negative() {
        im.inv_sign();
    }

    // |y| is an exact square: the imaginary part lies just beyond sqrt(|y|) in magnitude
    let sq = im.mul_full_prec(&im);
    let (im, err_im) = if ord(&sq, &y.abs()) == Some(Ordering::Equal) && trunc_exp < e_sv - pi {
        (nudge(&im, sign_ord(im.is_negative())), ErrorBound::Exact)
    } else {
        (im, ErrorBound::Ulp(-1).plus(ErrorBound::Ulp(trunc_exp - e_sv + pi)))
    };

    Ok(Attempt::Done(Candidate::new(re, im, err_re, err_im)))
}

/// Arcsine of `z` with `|Re z| < 1/2` and `|Im z| < 1/2` using the series
/// `asin(z) = z + z^3/6 + 3z^5/40 + ...`, where `t(k) = t(k-1) * z^2 * (2k-1)^2 / (2k(2k+1))`.
pub(super) fn asin_series(z: &BigComplex, p: usize) -> Result<Attempt, Error> {
    let (x, y) = (z.re(), z.im());
    let (ex, ey) = (exponent(x), exponent(y));

    if ex > -1 || ey > -1 {
        return Ok(Attempt::Retry);
    }

    let pi = p as isize;
    let m = ex.max(ey);

    if 2 * m + pi + 2 < 0 {
        if let Some(a) = asin_tiny(z, p, m)? {
            return Ok(a);
        }
    }

    // |t| < 2^(m - p) when both parts are
    let negligible = |v: &BigFloat| v.is_zero() || exponent(v) < m - pi;

    let mut s = BigComplex::from_raw_parts(to_precision(x, p)?, to_precision(y, p)?, p, p);
    let zz = arith::sqr(z, p)?;
    let mut t = s.clone();
    let mut t1 = None;

    let mut k: usize = 1;
    loop {
        let a = (2 * k - 1) as Word;
        let b = (2 * k) as Word;

        t = arith::mul(&t, &zz, p)?;
        t = arith::mul_word(&t, a, p)?;
        t = arith::mul_word(&t, a, p)?;
        t = arith::div_word(&t, b, p)?;
        t = arith::div_word(&t, b + 1, p)?;

        if k == 1 {
            t1 = Some(t.clone());
        }

        if negligible(t.re()) && negligible(t.im()) {
            break;
        }

        let re = checked(s.re().add(t.re(), p, RM))?;
        let im = checked(s.im().add(t.im(), p, RM))?;
        s = BigComplex::from_raw_parts(re, im, p, p);

        k += 1;

        if log2_ceil(4 * k + 1) >= p.saturating_sub(7) {
            return Ok(Attempt::Retry);
        }
    }

    let (mut re, mut im) = s.into_parts();
    if re.is_zero() || im.is_zero() {
        return Ok(Attempt::Retry);
    }

    let bound = m + log2_ceil(4 * k + 32) as isize;
    let mut err_re = ErrorBound::Ulp(bound - exponent(&re));
    let mut err_im = ErrorBound::Ulp(bound - exponent(&im));

    if let Some(t1) = t1.filter(|_| k == 1) {
        // the first term of the series is exact: the result is z moved slightly toward z^3/6
        if ord(&re, x) == Some(Ordering::Equal) && ord(&im, y) == Some(Ordering::Equal) {
            let e_t1 = match (t1.re().is_zero(), t1.im().is_zero()) {
                (true, true) => None,
                (true, false) => Some(exponent(t1.im())),
                (false, true) => Some(exponent(t1.re())),
                (false, false) => Some(exponent(t1.re()).max(exponent(t1.im()))),
            };

            if let Some(e_t1) = e_t1 {
                let dominates = |c: &BigFloat, v: &BigFloat| {
                    !c.is_zero() && exponent(c) > e_t1 - pi + 10 && e_t1 + 2 <= exponent(v) - pi
                };

                if dominates(t1.re(), &re) {
                    re = nudge(&re, sign_ord(t1.re().is_negative()));
                    err_re = ErrorBound::Exact;
                }

                if dominates(t1.im(), &im) {
                    im = nudge(&im, sign_ord(t1.im().is_negative()));
                    err_im = ErrorBound::Exact;
                }
            }
        }
    }

    Ok(Attempt::Done(Candidate::new(re, im, err_re, err_im)))
}

/// Arcsine of `z` with `|z|^2 < 2^-(p + 1)`, where `m` is the larger exponent of the parts of `z`.
///
/// Each part of `asin(z) - z` has the sign of the same part of `z^3/6`, and is less than the part
/// of `z` times `2^(2m + 1)` in magnitude. `z^2` is not computed, it may fall below the range of
/// exponents. Returns None if a part of `z^3` is too small for its sign to decide the direction.
fn asin_tiny(z: &BigComplex, p: usize, m: isize) -> Result<Option<Attempt>, Error> {
    let (x, y) = (z.re(), z.im());

    // Re(z^3) = x(x^2 - 3y^2), Im(z^3) = -y(y^2 - 3x^2)
    let (neg_re, neg_im) = match (cubic_sign(x, y, m), cubic_sign(y, x, m)) {
        (Some(a), Some(b)) => (x.is_negative() != a, y.is_negative() == b),
        _ => return Ok(None),
    };

    let (re, err_re) = tiny_part(x, p, neg_re)?;
    let (im, err_im) = tiny_part(y, p, neg_im)?;

    Ok(Some(Attempt::Done(Candidate::new(re, im, err_re, err_im))))
}

// Returns true if u^2 - 3v^2 is negative, or None if the difference is not large enough against
// 2^(4m) to dominate the rest of the series.
fn cubic_sign(u: &BigFloat, v: &BigFloat, m: isize) -> Option<bool> {
    // the larger part moves to [1/2, 1)
    let (eu, ev) = (exponent(u) - m, exponent(v) - m);

    // a square far below the other one does not change the sign
    let q = 2 * mantissa_len(u).max(mantissa_len(v)) as isize + 8;
    if 2 * eu < -q {
        return Some(true);
    }
    if 2 * ev < -q {
        return Some(false);
    }

    let mut us = u.clone();
    us.set_exponent(eu as Exponent);
    let mut vs = v.clone();
    vs.set_exponent(ev as Exponent);

    let three = BigFloat::from_word(3, WORD_BIT_SIZE);
    let d = us.mul_full_prec(&us).sub_full_prec(&vs.mul_full_prec(&vs).mul_full_prec(&three));

    if d.is_zero() || exponent(&d) <= 2 * m + 8 {
        None
    } else {
        Some(d.is_negative())
    }
}

// A part of z at precision p moved in the direction given by `neg`, or rounded to nearest with
// the error bound of the rounding and of the neglected terms.
fn tiny_part(v: &BigFloat, p: usize, neg: bool) -> Result<(BigFloat, ErrorBound), Error> {
    let w = to_precision(v, p)?;

    if ord(&w, v) == Some(Ordering::Equal) {
        Ok((nudge(&w, sign_ord(neg)), ErrorBound::Exact))
    } else {
        let k = (mantissa_len(&w) - p) as isize;
        Ok((w, ErrorBound::Ulp(k)))
    }
}

/// Arcsine of `z` with a large modulus: `asin(z) = -i*log(2iz) + O(1/z^2)` for `Im z < 0`.
pub(super) fn asin_large(z: &BigComplex, p: usize, cc: &mut Consts) -> Result<Attempt, Error> {
    let (ex, ey) = (exponent(z.re()), exponent(z.im()));

    if ex < 2 && ey < 2 {
        return Ok(Attempt::Retry);
    }

    let m = ex.max(ey);
    if 2 * m < p as isize + 1 {
        return Ok(Attempt::Retry);
    }

    let iz = z.mul_i(false);

    // log(2iz) = log(iz) + log(2)
    let l = arith::log(&iz, p, cc)?;
    let (l_re, l_im) = l.into_parts();
    let ln2 = cc.ln_2(p, RM);
    let mut l_re = checked(l_re.add(&ln2, p, RM))?;

    if l_re.is_zero() || l_im.is_zero() || l_re.is_inf() {
        return Ok(Attempt::Retry);
    }

    l_re.inv_sign();

    Ok(Attempt::Done(Candidate::new(l_im, l_re, ErrorBound::Ulp(3), ErrorBound::Ulp(3))))
}
