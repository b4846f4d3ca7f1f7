//! Arcsine evaluated as `asin(z) = -i*log(sqrt(1 - z^2) + iz)`.

use core::cmp::Ordering;

use astro_float_num::Consts;
use astro_float_num::RoundingMode;

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::util::checked;
use crate::common::util::exponent;
use crate::common::util::ord;
use crate::defs::Error;
use crate::num::BigComplex;
use crate::ops::arith;
use crate::ops::asin::Attempt;
use crate::ops::asin::Candidate;
use crate::ops::err::propagate_through_log;
use crate::ops::err::propagate_through_sqrt;
use crate::ops::err::ErrorBound;

const RM: RoundingMode = RoundingMode::ToEven;

/// Computes the arcsine of `z` with `Im z < 0` at precision `p`, tracking the error of each part.
/// Returns `Attempt::Retry` if an intermediate part vanishes.
pub(super) fn asin_generic(z: &BigComplex, p: usize, cc: &mut Consts) -> Result<Attempt, Error> {
    let (x, y) = (z.re(), z.im());

    // 1 - z^2
    let (sq_re, sq_im) = arith::sqr(z, p)?.into_parts();

    let a = checked(ONE.sub(&sq_re, p, RM))?;
    if a.is_zero() || sq_im.is_zero() {
        return Ok(Attempt::Retry);
    }

    let err = (
        ErrorBound::Ulp((exponent(&sq_re) - exponent(&a)).max(0)),
        ErrorBound::Ulp(-1),
    );

    let mut b = sq_im;
    b.inv_sign();

    let v = BigComplex::from_raw_parts(a, b, p, p);

    // sqrt(1 - z^2)
    let s = arith::sqrt(&v, p)?;
    if s.re().is_zero() || s.im().is_zero() {
        return Ok(Attempt::Retry);
    }

    let s_exp = (exponent(s.re()), exponent(s.im()));
    let (err_re, err_im) = propagate_through_sqrt(
        err,
        (exponent(v.re()), exponent(v.im())),
        v.re().is_positive(),
        s_exp,
        p,
    );
    let err = (err_re.after_rounding(), err_im.after_rounding());

    // sqrt(1 - z^2) + iz
    let (s_re, s_im) = s.into_parts();
    let u_re = checked(s_re.sub(y, p, RM))?;
    let u_im = checked(s_im.add(x, p, RM))?;
    if u_re.is_zero() || u_im.is_zero() {
        return Ok(Attempt::Retry);
    }

    let u_exp = (exponent(&u_re), exponent(&u_im));
    let err = (
        err.0.scaled(s_exp.0 - u_exp.0).after_half_rounding(),
        err.1.scaled(s_exp.1 - u_exp.1).after_half_rounding(),
    );

    let u = BigComplex::from_raw_parts(u_re, u_im, p, p);

    // log(sqrt(1 - z^2) + iz)
    let l = arith::log(&u, p, cc)?;
    if l.re().is_zero() || l.im().is_zero() {
        return Ok(Attempt::Retry);
    }

    let re_ge_two = ord(u.re(), &TWO) != Some(Ordering::Less);
    let (err_re, err_im) = match propagate_through_log(
        err,
        u_exp,
        re_ge_two,
        (exponent(l.re()), exponent(l.im())),
        p,
    ) {
        Some(err) => err,
        None => return Ok(Attempt::Retry),
    };

    // -i * log(...)
    let (mut l_re, l_im) = l.into_parts();
    l_re.inv_sign();

    Ok(Attempt::Done(Candidate::new(
        l_im,
        l_re,
        err_im.after_rounding(),
        err_re.after_rounding(),
    )))
}
