//! Arcsine.

mod fast;
mod generic;
mod special;

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::Consts;
use astro_float_num::EXPONENT_MIN;

use crate::common::consts::ONE;
use crate::common::util::exponent;
use crate::common::util::log2_ceil;
use crate::common::util::ord;
use crate::common::util::round_p;
use crate::ctx::Contextable;
use crate::ctx::ExponentRange;
use crate::defs::invert_rm_for_sign;
use crate::defs::Error;
use crate::defs::Inexact;
use crate::defs::Rounding;
use crate::num::BigComplex;
use crate::ops::err::ErrorBound;
use crate::ops::real;
use crate::ops::round::can_round;
use crate::ops::round::round_to_bits;

// A warning is logged once the number of iterations reaches this value.
const ITERATIONS_WARN: usize = 16;

/// Approximation of the result with the error bounds of its parts.
/// `ErrorBound::Exact` marks a part that rounds correctly as is.
#[derive(Debug)]
pub(super) struct Candidate {
    re: BigFloat,
    im: BigFloat,
    err_re: ErrorBound,
    err_im: ErrorBound,
}

impl Candidate {
    pub(super) fn new(re: BigFloat, im: BigFloat, err_re: ErrorBound, err_im: ErrorBound) -> Self {
        Candidate {
            re,
            im,
            err_re,
            err_im,
        }
    }

    fn can_round(&self, p_re: usize, p_im: usize, rm: Rounding) -> bool {
        can_round(&self.re, self.err_re, p_re, rm.re) && can_round(&self.im, self.err_im, p_im, rm.im)
    }
}

/// Outcome of an evaluation step.
#[derive(Debug)]
pub(super) enum Attempt {
    /// The step produced an approximation.
    Done(Candidate),

    /// The step is not applicable, or an intermediate value became degenerate.
    Retry,
}

#[derive(Debug, Clone, Copy)]
enum Path {
    NearOne,
    Series,
    Large,
    Generic,
}

fn accept(
    a: Attempt,
    path: Path,
    p_re: usize,
    p_im: usize,
    rm: Rounding,
) -> Option<(Path, Candidate)> {
    match a {
        Attempt::Done(c) if c.can_round(p_re, p_im, rm) => Some((path, c)),
        _ => None,
    }
}

// Tries the approximations in order at working precision p.
fn evaluate(
    z: &BigComplex,
    p: usize,
    iteration: usize,
    p_re: usize,
    p_im: usize,
    rm: Rounding,
    cc: &mut Consts,
) -> Result<Option<(Path, Candidate)>, Error> {
    if iteration == 1 {
        let a = fast::asin_near_one(z, p, cc)?;
        if let Some(r) = accept(a, Path::NearOne, p_re, p_im, rm) {
            return Ok(Some(r));
        }
    }

    let a = fast::asin_series(z, p)?;
    if let Some(r) = accept(a, Path::Series, p_re, p_im, rm) {
        return Ok(Some(r));
    }

    let a = fast::asin_large(z, p, cc)?;
    if let Some(r) = accept(a, Path::Large, p_re, p_im, rm) {
        return Ok(Some(r));
    }

    let a = generic::asin_generic(z, p, cc)?;
    Ok(accept(a, Path::Generic, p_re, p_im, rm))
}

// Increases the working precision until an approximation of asin(z) can be rounded.
// Both parts of z are finite and nonzero, and the imaginary part is negative.
// Returns the approximation and the number of iterations performed.
fn precision_loop(
    z: &BigComplex,
    p_re: usize,
    p_im: usize,
    rm: Rounding,
    cc: &mut Consts,
) -> Result<(Candidate, usize), Error> {
    let target = p_re.max(p_im);
    let on_unit_line = ord(&z.re().abs(), &ONE) == Some(Ordering::Equal);

    let mut p = target;
    let mut iteration = 0;

    loop {
        iteration += 1;

        let inc = if iteration <= 2 { log2_ceil(p) + 3 } else { p / 2 };
        p = round_p(p + inc);

        // 1 - z^2 loses about 2|e(y)| bits when |x| = 1
        if iteration > 1 && on_unit_line {
            p = p.max(round_p(target + 2 * exponent(z.im()).unsigned_abs()));
        }

        log::trace!("asin iteration {} at precision {}", iteration, p);

        if let Some((path, c)) = evaluate(z, p, iteration, p_re, p_im, rm, cc)? {
            log::debug!(
                "asin accepted {:?} approximation at precision {} after {} iterations",
                path,
                p,
                iteration
            );
            return Ok((c, iteration));
        }

        if iteration == ITERATIONS_WARN {
            log::warn!(
                "asin is not converging: {} iterations, precision {}",
                iteration,
                p
            );
        }
    }
}

/// Computes the arcsine of `z` rounded to `p_re` and `p_im` bits without clamping the exponent.
pub(crate) fn asin_unbounded(
    z: &BigComplex,
    p_re: usize,
    p_im: usize,
    rm: Rounding,
    cc: &mut Consts,
) -> Result<(BigComplex, Inexact), Error> {
    rm.validate()?;

    if p_re == 0 || p_im == 0 {
        return Err(Error::InvalidArgument);
    }

    if let Some(ret) = special::asin_special(z, p_re, p_im, rm, cc)? {
        return Ok(ret);
    }

    // asin(-z) = -asin(z): evaluate in the lower half-plane
    let reflect = !z.im().is_negative();
    let neg;
    let (w, rm_w) = if reflect {
        neg = -z;
        (&neg, Rounding::new(invert_rm_for_sign(rm.re), invert_rm_for_sign(rm.im)))
    } else {
        (z, rm)
    };

    let (mut re, mut t_re, mut im, mut t_im) =
        if exponent(w.re()) - exponent(w.im()) + 3 < EXPONENT_MIN as isize {
            // |Re asin(z)| <= |x/y| is below half of the smallest normal number,
            // and Im asin(z) differs from asinh(y) far below its last bit
            log::debug!("asin real part underflows for {}", w);
            let (re, t_re) = ExponentRange::full().underflow(w.re().is_negative(), p_re, rm_w.re);
            let (im, t_im) = real::asinh(w.im(), p_im, rm_w.im, cc)?;
            (re, t_re, im, t_im)
        } else {
            let (c, _) = precision_loop(w, p_re, p_im, rm_w, cc)?;
            let (re, t_re) = round_to_bits(&c.re, p_re, rm_w.re)?;
            let (im, t_im) = round_to_bits(&c.im, p_im, rm_w.im)?;
            (re, t_re, im, t_im)
        };

    if reflect {
        re.inv_sign();
        im.inv_sign();
        t_re = t_re.reverse();
        t_im = t_im.reverse();
    }

    Ok((BigComplex::from_raw_parts(re, im, p_re, p_im), (t_re, t_im)))
}

impl BigComplex {
    /// Computes the arcsine of a number with precision `p_re` of the real part and `p_im` of the
    /// imaginary part. Each part of the result is correctly rounded using the corresponding
    /// rounding mode of `rm`, and the result is clamped to the exponent range of the context.
    /// Returns the result and the ternary values of its parts.
    ///
    /// The branch cuts lie on the real axis outside of `[-1, 1]`. The sign of a zero imaginary
    /// part selects the side of the cut.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, or the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use astro_complex::BigComplex;
    /// # use astro_complex::Consts;
    /// # use astro_complex::Rounding;
    /// # use astro_complex::RoundingMode;
    /// let mut cc = Consts::new().expect("Constants cache allocated");
    ///
    /// let z = BigComplex::from_f64(0.5, 0.0);
    /// let (w, t) = z.asin(64, 64, Rounding::both(RoundingMode::ToEven), &mut cc).expect("asin computed");
    ///
    /// // asin(0.5) = pi/6
    /// assert!(w.im().is_zero());
    /// assert_ne!(t.0, core::cmp::Ordering::Equal);
    /// ```
    pub fn asin<C: Contextable>(
        &self,
        p_re: usize,
        p_im: usize,
        rm: Rounding,
        ctx: &mut C,
    ) -> Result<(BigComplex, Inexact), Error> {
        let range = ctx.exponent_range();
        let (w, (t_re, t_im)) = asin_unbounded(self, p_re, p_im, rm, ctx.consts())?;

        let (re, im) = w.into_parts();
        let (re, t_re) = range.check_range(re, p_re, t_re, rm.re);
        let (im, t_im) = range.check_range(im, p_im, t_im, rm.im);

        Ok((BigComplex::from_raw_parts(re, im, p_re, p_im), (t_re, t_im)))
    }

    /// Computes the arcsine of a number and stores the result in `rop` using the precision of
    /// `rop`. Returns the ternary values of the parts of the result.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn asin_into<C: Contextable>(
        &self,
        rop: &mut BigComplex,
        rm: Rounding,
        ctx: &mut C,
    ) -> Result<Inexact, Error> {
        let (p_re, p_im) = rop.precision();
        let (w, t) = self.asin(p_re, p_im, rm, ctx)?;
        *rop = w;
        Ok(t)
    }

    /// Replaces `self` with its arcsine, keeping the precision of `self`.
    /// Returns the ternary values of the parts of the result.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn asin_mut<C: Contextable>(&mut self, rm: Rounding, ctx: &mut C) -> Result<Inexact, Error> {
        let z = self.clone();
        z.asin_into(self, rm, ctx)
    }
}
