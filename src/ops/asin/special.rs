//! Arcsine of numbers with a NaN, infinite, or zero part.

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::Consts;
use astro_float_num::INF_NEG;
use astro_float_num::INF_POS;
use astro_float_num::NAN;

use crate::common::consts::ONE;
use crate::common::util::ord;
use crate::defs::Inexact;
use crate::defs::Rounding;
use crate::defs::EXACT;
use crate::defs::Error;
use crate::num::BigComplex;
use crate::ops::real;

fn signed_inf(neg: bool) -> BigFloat {
    if neg {
        INF_NEG
    } else {
        INF_POS
    }
}

fn signed_zero(neg: bool, p: usize) -> BigFloat {
    let mut z = BigFloat::new(p);
    if neg {
        z.inv_sign();
    }
    z
}

/// Computes the arcsine of `z` if `z` has a NaN, infinite, or zero part.
/// Returns None if both parts of `z` are finite and nonzero.
pub(super) fn asin_special(
    z: &BigComplex,
    p_re: usize,
    p_im: usize,
    rm: Rounding,
    cc: &mut Consts,
) -> Result<Option<(BigComplex, Inexact)>, Error> {
    let (x, y) = (z.re(), z.im());

    let (re, t_re, im, t_im) = if x.is_nan() || y.is_nan() {
        if x.is_inf() || y.is_inf() {
            // the sign of the real part is unspecified
            (NAN, Ordering::Equal, signed_inf(y.is_negative()), Ordering::Equal)
        } else if x.is_zero() {
            (signed_zero(x.is_negative(), p_re), Ordering::Equal, NAN, Ordering::Equal)
        } else {
            (NAN, Ordering::Equal, NAN, Ordering::Equal)
        }
    } else if x.is_inf() {
        // asin(+-inf + i*y) = +-pi/2 + i*inf*sign(y), and +-pi/4 if y is also infinite
        let k = if y.is_inf() { 2 } else { 1 };
        let (re, t_re) = real::pi_shifted(k, x.is_negative(), p_re, rm.re, cc)?;
        (re, t_re, signed_inf(y.is_negative()), Ordering::Equal)
    } else if y.is_inf() {
        (
            signed_zero(x.is_negative(), p_re),
            Ordering::Equal,
            signed_inf(y.is_negative()),
            Ordering::Equal,
        )
    } else if y.is_zero() {
        if ord(&x.abs(), &ONE) == Some(Ordering::Greater) {
            // asin(x +- i0) = sign(x)*pi/2 +- i*acosh(|x|) for |x| > 1
            let (re, t_re) = real::half_pi(x.is_negative(), p_re, rm.re, cc)?;
            let (im, t_im) = real::acosh(&x.abs(), y.is_negative(), p_im, rm.im, cc)?;
            (re, t_re, im, t_im)
        } else {
            let (re, t_re) = real::asin(x, p_re, rm.re, cc)?;
            (re, t_re, signed_zero(y.is_negative(), p_im), Ordering::Equal)
        }
    } else if x.is_zero() {
        let (im, t_im) = real::asinh(y, p_im, rm.im, cc)?;
        (signed_zero(x.is_negative(), p_re), Ordering::Equal, im, t_im)
    } else {
        return Ok(None);
    };

    let t = if re.is_nan() || im.is_nan() { EXACT } else { (t_re, t_im) };

    Ok(Some((BigComplex::from_raw_parts(re, im, p_re, p_im), t)))
}
