//! Context holds the constants cache and the exponent range used by the evaluation of functions.

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::Consts;
use astro_float_num::Exponent;
use astro_float_num::RoundingMode;
use astro_float_num::EXPONENT_MAX;
use astro_float_num::EXPONENT_MIN;

use crate::common::util::exponent;
use crate::common::util::ord;
use crate::common::util::sign_ord;
use crate::defs::is_nearest;
use crate::defs::Error;

/// Range of exponent values which results of functions are clamped to.
///
/// A number is in range if its exponent `e` (the number being represented as `0.1xxx * 2^e`)
/// satisfies `emin <= e <= emax`. The range is a plain value owned by the caller, intermediate
/// computations always use the full range of exponents and the result is clamped once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentRange {
    emin: Exponent,
    emax: Exponent,
}

impl ExponentRange {
    /// Creates an exponent range.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `emin` is greater than `emax`.
    pub fn new(emin: Exponent, emax: Exponent) -> Result<Self, Error> {
        if emin > emax {
            return Err(Error::InvalidArgument);
        }
        Ok(ExponentRange { emin, emax })
    }

    /// Full range of exponents supported by `BigFloat`.
    pub fn full() -> Self {
        ExponentRange {
            emin: EXPONENT_MIN,
            emax: EXPONENT_MAX,
        }
    }

    /// Returns the minimum exponent.
    pub fn emin(&self) -> Exponent {
        self.emin
    }

    /// Returns the maximum exponent.
    pub fn emax(&self) -> Exponent {
        self.emax
    }

    /// Clamps `x`, which is `v` correctly rounded to `p` bits using the rounding mode `rm`
    /// with ternary value `t`, into the range.
    /// Returns the clamped value and its ternary value with respect to `v`.
    ///
    /// Overflow produces an infinity or the largest finite number, and underflow produces zero
    /// or the smallest normal number, depending on the rounding mode.
    pub fn check_range(
        &self,
        x: BigFloat,
        p: usize,
        t: Ordering,
        rm: RoundingMode,
    ) -> (BigFloat, Ordering) {
        self.check_range_scaled(x, 0, p, t, rm)
    }

    /// Clamps `x * 2^shift` into the range, where `x` is rounded to `p` bits with ternary value
    /// `t`. The scaled value does not need to be representable with the full range of exponents.
    pub(crate) fn check_range_scaled(
        &self,
        mut x: BigFloat,
        shift: isize,
        p: usize,
        t: Ordering,
        rm: RoundingMode,
    ) -> (BigFloat, Ordering) {
        if x.is_zero() || x.is_inf() || x.is_nan() {
            return (x, t);
        }

        let ex = exponent(&x);
        let e = ex.saturating_add(shift);
        let neg = x.is_negative();

        if e > self.emax as isize {
            self.overflow(neg, p, rm)
        } else if e < self.emin as isize {
            let to_min = if is_nearest(rm) {
                if e < self.emin as isize - 1 {
                    false
                } else {
                    // halfway between zero and the smallest normal number rounds to zero
                    // unless the exact value is larger in magnitude
                    let mut half = BigFloat::from_word(1, p);
                    half.set_exponent(ex as Exponent);
                    let is_half = ord(&x.abs(), &half) == Some(Ordering::Equal);
                    let below_exact = if neg { t == Ordering::Greater } else { t == Ordering::Less };
                    !is_half || below_exact
                }
            } else {
                rm == RoundingMode::FromZero
                    || (rm == RoundingMode::Up && !neg)
                    || (rm == RoundingMode::Down && neg)
            };

            self.flush(neg, p, to_min)
        } else {
            if shift != 0 {
                x.set_exponent(e as Exponent);
            }
            (x, t)
        }
    }

    /// Result of rounding a nonzero number much smaller in magnitude than the smallest number of
    /// the range, with its ternary value.
    pub(crate) fn underflow(&self, neg: bool, p: usize, rm: RoundingMode) -> (BigFloat, Ordering) {
        let to_min = rm == RoundingMode::FromZero
            || (rm == RoundingMode::Up && !neg)
            || (rm == RoundingMode::Down && neg);
        self.flush(neg, p, to_min)
    }

    // Either the smallest number of the range or zero, with the sign of the value.
    fn flush(&self, neg: bool, p: usize, to_min: bool) -> (BigFloat, Ordering) {
        if to_min {
            let mut m = self.min_positive(p);
            if neg {
                m.inv_sign();
            }
            (m, sign_ord(neg))
        } else {
            let mut z = BigFloat::new(p);
            if neg {
                z.inv_sign();
            }
            (z, sign_ord(!neg))
        }
    }

    /// Result of rounding a number too large in magnitude for the range, with its ternary value.
    pub(crate) fn overflow(&self, neg: bool, p: usize, rm: RoundingMode) -> (BigFloat, Ordering) {
        let away = is_nearest(rm)
            || rm == RoundingMode::FromZero
            || (rm == RoundingMode::Up && !neg)
            || (rm == RoundingMode::Down && neg);

        if away {
            if neg {
                (astro_float_num::INF_NEG, Ordering::Less)
            } else {
                (astro_float_num::INF_POS, Ordering::Greater)
            }
        } else {
            let mut m = self.max_value(p);
            if neg {
                m.inv_sign();
            }
            (m, sign_ord(!neg))
        }
    }

    // The largest finite number with precision `p`.
    fn max_value(&self, p: usize) -> BigFloat {
        let one = BigFloat::from_word(1, p);
        let mut ulp = BigFloat::from_word(1, p);
        ulp.set_exponent((1 - p as isize) as Exponent);
        let mut m = one.sub(&ulp, p, RoundingMode::ToZero);
        m.set_exponent(self.emax);
        m
    }

    // The smallest positive normal number with precision `p`.
    fn min_positive(&self, p: usize) -> BigFloat {
        let mut m = BigFloat::from_word(1, p);
        m.set_exponent(self.emin);
        m
    }
}

impl Default for ExponentRange {
    fn default() -> Self {
        ExponentRange::full()
    }
}

/// Context contains the constants cache and the exponent range, and is passed to the functions of
/// complex numbers.
#[derive(Debug)]
pub struct Context {
    cc: Consts,
    range: ExponentRange,
}

impl Context {
    /// Create a new context using the full range of exponents.
    pub fn new(cc: Consts) -> Self {
        Context {
            cc,
            range: ExponentRange::full(),
        }
    }

    /// Create a new context with the exponent range `range`.
    pub fn with_exponent_range(cc: Consts, range: ExponentRange) -> Self {
        Context { cc, range }
    }

    /// Destructures the context and returns its parts.
    pub fn to_raw_parts(self) -> (Consts, ExponentRange) {
        let Context { cc, range } = self;
        (cc, range)
    }

    /// Sets the constant cache of the context.
    pub fn set_consts(&mut self, cc: Consts) {
        self.cc = cc;
    }

    /// Sets the exponent range of the context.
    pub fn set_exponent_range(&mut self, range: ExponentRange) {
        self.range = range;
    }

    /// Returns a mutable reference to the constant cache of the context.
    pub fn consts(&mut self) -> &mut Consts {
        &mut self.cc
    }

    /// Returns the exponent range of the context.
    pub fn exponent_range(&self) -> ExponentRange {
        self.range
    }

    /// Clones `self` and returns the cloned context.
    ///
    /// # Errors
    ///
    /// - MemoryAllocation: failed to allocate memory for the constants cache.
    pub fn clone(&self) -> Result<Self, Error> {
        let cc = Consts::new()?;
        Ok(Context {
            cc,
            range: self.range,
        })
    }
}

/// Represents a type that can be used as context by the functions of complex numbers.
///
/// ## Examples
///
/// ```
/// # use astro_float_num::Consts;
/// # use astro_complex::ctx::Contextable;
/// # use astro_complex::ctx::ExponentRange;
///
/// let cc = Consts::new().expect("Constants cache allocated");
///
/// // A constants cache alone is a context with the full exponent range.
/// assert_eq!(ExponentRange::full(), cc.exponent_range());
/// ```
pub trait Contextable {
    /// Returns the exponent range of the context.
    fn exponent_range(&self) -> ExponentRange;

    /// Returns a mutable reference to the constant cache of the context.
    fn consts(&mut self) -> &mut Consts;
}

impl Contextable for Consts {
    fn exponent_range(&self) -> ExponentRange {
        ExponentRange::full()
    }

    fn consts(&mut self) -> &mut Consts {
        self
    }
}

impl Contextable for (&mut Consts, ExponentRange) {
    fn exponent_range(&self) -> ExponentRange {
        self.1
    }

    fn consts(&mut self) -> &mut Consts {
        self.0
    }
}

impl Contextable for Context {
    fn exponent_range(&self) -> ExponentRange {
        Context::exponent_range(self)
    }

    fn consts(&mut self) -> &mut Consts {
        Context::consts(self)
    }
}
