//! Hyperbolic arcsine.

use crate::ctx::Contextable;
use crate::defs::invert_rm_for_sign;
use crate::defs::Error;
use crate::defs::Inexact;
use crate::defs::Rounding;
use crate::num::BigComplex;
use crate::ops::asin::asin_unbounded;

impl BigComplex {
    /// Computes the hyperbolic arcsine of a number with precision `p_re` of the real part and
    /// `p_im` of the imaginary part. Each part of the result is correctly rounded using the
    /// corresponding rounding mode of `rm`, and the result is clamped to the exponent range of
    /// the context. Returns the result and the ternary values of its parts.
    ///
    /// The branch cuts lie on the imaginary axis outside of `[-i, i]`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, or the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn asinh<C: Contextable>(
        &self,
        p_re: usize,
        p_im: usize,
        rm: Rounding,
        ctx: &mut C,
    ) -> Result<(BigComplex, Inexact), Error> {
        rm.validate()?;

        // asinh(z) = -i*asin(iz)
        let iz = self.mul_i(false);
        let rm_asin = Rounding::new(invert_rm_for_sign(rm.im), rm.re);

        let range = ctx.exponent_range();
        let (w, (t_re, t_im)) = asin_unbounded(&iz, p_im, p_re, rm_asin, ctx.consts())?;

        let (re, im) = w.mul_i(true).into_parts();
        let (re, t_re_h) = range.check_range(re, p_re, t_im, rm.re);
        let (im, t_im_h) = range.check_range(im, p_im, t_re.reverse(), rm.im);

        Ok((BigComplex::from_raw_parts(re, im, p_re, p_im), (t_re_h, t_im_h)))
    }

    /// Computes the hyperbolic arcsine of a number and stores the result in `rop` using the
    /// precision of `rop`. Returns the ternary values of the parts of the result.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn asinh_into<C: Contextable>(
        &self,
        rop: &mut BigComplex,
        rm: Rounding,
        ctx: &mut C,
    ) -> Result<Inexact, Error> {
        let (p_re, p_im) = rop.precision();
        let (w, t) = self.asinh(p_re, p_im, rm, ctx)?;
        *rop = w;
        Ok(t)
    }
}
