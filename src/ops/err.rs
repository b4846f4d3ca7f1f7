//! Error bounds expressed in units in the last place.
//!
//! A bound `Ulp(k)` of a value `v` computed with precision `p` states that the exact value lies
//! within `2^k * ulp(v)` from `v`, where `ulp(v) = 2^(e - p)` and `e` is the exponent of `v`.

use crate::common::util::floor_half;

/// Upper bound of the error of a computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBound {
    /// The value is exact.
    Exact,

    /// The error does not exceed `2^k` units in the last place.
    Ulp(isize),
}

impl ErrorBound {
    /// Returns the exponent of the bound, or None if the value is exact.
    pub fn exponent(&self) -> Option<isize> {
        match *self {
            ErrorBound::Exact => None,
            ErrorBound::Ulp(k) => Some(k),
        }
    }

    /// Creates the bound of a value with exponent `e` and precision `p` from the absolute
    /// error bound `2^abs_err_exp`.
    pub fn from_absolute(abs_err_exp: isize, e: isize, p: usize) -> Self {
        ErrorBound::Ulp(abs_err_exp - e + p as isize)
    }

    /// Returns the exponent of the absolute error bound of a value with exponent `e` and
    /// precision `p`.
    pub fn to_absolute(&self, e: isize, p: usize) -> Option<isize> {
        self.exponent().map(|k| k + e - p as isize)
    }

    /// Bound of the sum of two errors expressed in the same units.
    pub fn plus(self, other: Self) -> Self {
        match (self, other) {
            (ErrorBound::Exact, o) | (o, ErrorBound::Exact) => o,
            (ErrorBound::Ulp(a), ErrorBound::Ulp(b)) => ErrorBound::Ulp(a.max(b) + 1),
        }
    }

    /// The larger of two bounds.
    pub fn max(self, other: Self) -> Self {
        match (self, other) {
            (ErrorBound::Exact, o) | (o, ErrorBound::Exact) => o,
            (ErrorBound::Ulp(a), ErrorBound::Ulp(b)) => ErrorBound::Ulp(a.max(b)),
        }
    }

    /// Bound after an operation introducing an error of at most 1 ulp.
    pub fn after_rounding(self) -> Self {
        match self {
            ErrorBound::Exact => ErrorBound::Ulp(0),
            ErrorBound::Ulp(k) => ErrorBound::Ulp(k.max(0) + 1),
        }
    }

    /// Bound after an operation introducing an error of at most 1/2 ulp.
    pub fn after_half_rounding(self) -> Self {
        match self {
            ErrorBound::Exact => ErrorBound::Ulp(-1),
            ErrorBound::Ulp(k) => ErrorBound::Ulp(k.max(-1) + 1),
        }
    }

    /// Re-expresses the bound in units of a value whose exponent is `k` less than the exponent
    /// of the value the bound was computed for.
    pub fn scaled(self, k: isize) -> Self {
        match self {
            ErrorBound::Exact => ErrorBound::Exact,
            ErrorBound::Ulp(e) => ErrorBound::Ulp(e + k),
        }
    }

    // Relative error exponent of a value with the bound.
    fn relative(&self) -> Option<isize> {
        self.exponent().map(|k| k + 1)
    }
}

/// Converts the absolute error `2^abs_err_exp` of a value with exponent `value_exp`
/// to the exponent of the relative error.
pub fn absolute_to_relative(abs_err_exp: isize, value_exp: isize) -> isize {
    abs_err_exp - value_exp + 1
}

/// Converts the relative error `2^rel_err_exp` of a value with exponent `value_exp`
/// to the exponent of the absolute error.
pub fn relative_to_absolute(rel_err_exp: isize, value_exp: isize) -> isize {
    rel_err_exp + value_exp
}

/// Error of `r = a - b` computed with the same precision as `a` and `b`, in units of `r`,
/// excluding the rounding of the subtraction itself.
/// `ea`, `eb`, `er` are the exponents of `a`, `b`, `r`. Cancellation inflates the error by
/// the number of canceled bits.
pub fn propagate_through_subtraction(
    err_a: ErrorBound,
    ea: isize,
    err_b: ErrorBound,
    eb: isize,
    er: isize,
) -> ErrorBound {
    err_a.scaled(ea - er).plus(err_b.scaled(eb - er))
}

/// Error of `w = sqrt(z)` induced by the errors `err` of the components of `z`, excluding the
/// rounding of the square root itself.
///
/// `z_exp` are the exponents of the real and imaginary parts of `z`, `w_exp` are the exponents
/// of the components of `w`, `p` is the precision of both. The imaginary part of `z` must be
/// nonzero and have the same sign as the exact value.
///
/// If the real part is positive, the relative error is small and the imaginary part is smaller
/// than the real part by at least 2 binary orders, the relative error of the real part
/// doubles at most and the imaginary part is bounded proportionally to the ratio of the parts.
/// Otherwise the bound `|h| / sqrt(|z|)` is used, where `h` is the absolute error of `z`.
pub fn propagate_through_sqrt(
    err: (ErrorBound, ErrorBound),
    z_exp: (isize, isize),
    re_positive: bool,
    w_exp: (isize, isize),
    p: usize,
) -> (ErrorBound, ErrorBound) {
    let k = match err.0.max(err.1).exponent() {
        Some(k) => k.max(0),
        None => return (ErrorBound::Exact, ErrorBound::Exact),
    };

    let pi = p as isize;
    let dif = z_exp.0 - z_exp.1;

    if re_positive && dif >= 2 && k <= pi - 2 {
        (
            ErrorBound::Ulp(k + 1),
            ErrorBound::Ulp(w_exp.0 - w_exp.1 + k + 3 - dif),
        )
    } else {
        let a = abs_max(err, z_exp, p);
        let e = z_exp.0.max(z_exp.1);
        let b = a + 1 - floor_half(e - 1);
        (
            ErrorBound::from_absolute(b, w_exp.0, p),
            ErrorBound::from_absolute(b, w_exp.1, p),
        )
    }
}

/// Error of `w = log(z)` induced by the errors `err` of the components of `z`, excluding the
/// rounding of the logarithm itself.
///
/// `z_exp` are the exponents of the real and imaginary parts of `z`, `w_exp` are the exponents
/// of the components of `w`, `p` is the precision of both. The real part of `z` must be positive.
///
/// If the real part is at least 2 and larger than the imaginary part by at least 2 binary orders,
/// the relative error of the real part grows by 1 bit and the imaginary part is bounded
/// proportionally to the ratio of the parts. Otherwise the bound `|h| / (|z| - |h|)` is used,
/// and None is returned if `|h|` is not small enough compared to `|z|`.
pub fn propagate_through_log(
    err: (ErrorBound, ErrorBound),
    z_exp: (isize, isize),
    re_ge_two: bool,
    w_exp: (isize, isize),
    p: usize,
) -> Option<(ErrorBound, ErrorBound)> {
    let k = match err.0.max(err.1).exponent() {
        Some(k) => k.max(0),
        None => return Some((ErrorBound::Exact, ErrorBound::Exact)),
    };

    let pi = p as isize;
    let dif = z_exp.0 - z_exp.1;

    if re_ge_two && dif >= 2 && k <= pi - 4 {
        Some((
            ErrorBound::Ulp(k + 2),
            ErrorBound::Ulp(k + 5 - dif + w_exp.0 - w_exp.1),
        ))
    } else {
        let a = abs_max(err, z_exp, p);
        let e = z_exp.0.max(z_exp.1);
        if a + 1 > e - 2 {
            return None;
        }
        let b = a + 3 - e;
        Some((
            ErrorBound::from_absolute(b, w_exp.0, p),
            ErrorBound::from_absolute(b, w_exp.1, p),
        ))
    }
}

// Largest absolute error exponent of the two components.
fn abs_max(err: (ErrorBound, ErrorBound), z_exp: (isize, isize), p: usize) -> isize {
    let a_re = err.0.to_absolute(z_exp.0, p);
    let a_im = err.1.to_absolute(z_exp.1, p);
    match (a_re, a_im) {
        (Some(a), Some(b)) => a.max(b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => isize::MIN / 2,
    }
}

/// Exponent of the relative error of a value with the bound `err`, if the value is not exact.
pub fn relative_error(err: ErrorBound, p: usize) -> Option<isize> {
    err.relative().map(|r| r - p as isize)
}
