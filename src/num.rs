//! Complex number with arbitrary precision of the real and the imaginary parts.

use core::cmp::Ordering;
use core::fmt::Display;
use core::ops::Neg;

use astro_float_num::BigFloat;
use astro_float_num::WORD_BIT_SIZE;

#[cfg(feature = "random")]
use astro_float_num::Exponent;

use crate::defs::Error;
use crate::defs::Inexact;
use crate::defs::Rounding;
use crate::ops::round::round_to_bits;

/// A complex number. The real and the imaginary parts have their own precision in bits,
/// and each part is representable with its precision.
#[derive(Debug, Clone)]
pub struct BigComplex {
    re: BigFloat,
    im: BigFloat,
    p_re: usize,
    p_im: usize,
}

impl BigComplex {
    /// Returns a new complex number with the value of positive zero, with precision `p_re` of the
    /// real part and `p_im` of the imaginary part.
    pub fn new(p_re: usize, p_im: usize) -> Self {
        BigComplex {
            re: BigFloat::new(p_re),
            im: BigFloat::new(p_im),
            p_re,
            p_im,
        }
    }

    /// Constructs a complex number from its parts without rounding.
    /// The precision of each part is the length of its mantissa.
    pub fn from_parts(re: BigFloat, im: BigFloat) -> Self {
        let p_re = re.mantissa_max_bit_len().unwrap_or(WORD_BIT_SIZE);
        let p_im = im.mantissa_max_bit_len().unwrap_or(WORD_BIT_SIZE);
        BigComplex { re, im, p_re, p_im }
    }

    /// Constructs a complex number from its parts rounded to precision `p_re` and `p_im` using
    /// rounding modes `rm`. Returns the number and the ternary value of the rounding.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, or the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn from_parts_rounded(
        re: &BigFloat,
        im: &BigFloat,
        p_re: usize,
        p_im: usize,
        rm: Rounding,
    ) -> Result<(Self, Inexact), Error> {
        rm.validate()?;

        let (re, t_re) = round_to_bits(re, p_re, rm.re)?;
        let (im, t_im) = round_to_bits(im, p_im, rm.im)?;

        Ok((BigComplex { re, im, p_re, p_im }, (t_re, t_im)))
    }

    /// Constructs a complex number from a pair of `f64` values. Both parts have precision 53.
    /// The sign of zero is preserved.
    pub fn from_f64(re: f64, im: f64) -> Self {
        BigComplex {
            re: part_from_f64(re),
            im: part_from_f64(im),
            p_re: 53,
            p_im: 53,
        }
    }

    pub(crate) fn from_raw_parts(re: BigFloat, im: BigFloat, p_re: usize, p_im: usize) -> Self {
        BigComplex { re, im, p_re, p_im }
    }

    /// Returns the real part.
    pub fn re(&self) -> &BigFloat {
        &self.re
    }

    /// Returns the imaginary part.
    pub fn im(&self) -> &BigFloat {
        &self.im
    }

    /// Returns the precision of the real and the imaginary parts.
    pub fn precision(&self) -> (usize, usize) {
        (self.p_re, self.p_im)
    }

    /// Decomposes the number into the real and the imaginary parts.
    pub fn into_parts(self) -> (BigFloat, BigFloat) {
        (self.re, self.im)
    }

    /// Sets the precision of the real part to `p_re` and of the imaginary part to `p_im`,
    /// rounding the parts using rounding modes `rm`. Returns the ternary value of the rounding.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, or the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn set_precision(&mut self, p_re: usize, p_im: usize, rm: Rounding) -> Result<Inexact, Error> {
        let (z, t) = Self::from_parts_rounded(&self.re, &self.im, p_re, p_im, rm)?;
        *self = z;
        Ok(t)
    }

    /// Assigns the value of `z` rounded to the precision of `self` using rounding modes `rm`.
    /// Returns the ternary value of the rounding.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the rounding mode is invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn set(&mut self, z: &BigComplex, rm: Rounding) -> Result<Inexact, Error> {
        let (v, t) = Self::from_parts_rounded(&z.re, &z.im, self.p_re, self.p_im, rm)?;
        *self = v;
        Ok(t)
    }

    /// Returns true if any part of `self` is NaN.
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Returns true if any part of `self` is infinite.
    pub fn is_inf(&self) -> bool {
        self.re.is_inf() || self.im.is_inf()
    }

    /// Returns true if both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Returns the complex conjugate of `self`.
    pub fn conj(&self) -> Self {
        let mut ret = self.clone();
        ret.im.inv_sign();
        ret
    }

    /// Returns `self` multiplied by `i`, or by `-i` if `neg` is true.
    /// The precision of the real and the imaginary parts is swapped accordingly.
    pub fn mul_i(&self, neg: bool) -> Self {
        let mut re = self.im.clone();
        let mut im = self.re.clone();
        if neg {
            im.inv_sign();
        } else {
            re.inv_sign();
        }
        BigComplex {
            re,
            im,
            p_re: self.p_im,
            p_im: self.p_re,
        }
    }

    /// Returns true if the values of the parts of `self` and `z` are equal,
    /// including the signs of zeros and infinities. NaN parts are equal to each other.
    pub fn bit_eq(&self, z: &BigComplex) -> bool {
        part_eq(&self.re, &z.re) && part_eq(&self.im, &z.im)
    }

    /// Returns a random normalized complex number. The exponents of the parts lie in the range
    /// `exp_from` to `exp_to`, and their signs are random.
    #[cfg(feature = "random")]
    pub fn random_normal(p_re: usize, p_im: usize, exp_from: Exponent, exp_to: Exponent) -> Self {
        let re = BigFloat::random_normal(p_re, exp_from, exp_to);
        let im = BigFloat::random_normal(p_im, exp_from, exp_to);

        let (re, _) = round_to_bits(&re, p_re.max(1), astro_float_num::RoundingMode::ToZero)
            .unwrap_or((re, Ordering::Equal));
        let (im, _) = round_to_bits(&im, p_im.max(1), astro_float_num::RoundingMode::ToZero)
            .unwrap_or((im, Ordering::Equal));

        BigComplex { re, im, p_re, p_im }
    }
}

fn part_from_f64(f: f64) -> BigFloat {
    let mut x = BigFloat::from_f64(f, 64);
    if f == 0.0 && x.is_negative() != f.is_sign_negative() {
        x.inv_sign();
    }
    x
}

fn part_eq(a: &BigFloat, b: &BigFloat) -> bool {
    if a.is_nan() || b.is_nan() {
        a.is_nan() && b.is_nan()
    } else {
        a.is_negative() == b.is_negative() && a.cmp(b) == Some(0)
    }
}

impl PartialEq for BigComplex {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl Neg for BigComplex {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.re.inv_sign();
        self.im.inv_sign();
        self
    }
}

impl Neg for &BigComplex {
    type Output = BigComplex;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Display for BigComplex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} {})", self.re, self.im)
    }
}
