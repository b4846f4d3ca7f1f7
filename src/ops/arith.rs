//! Arithmetic of complex numbers used by the evaluation of functions.
//!
//! `sqr`, `mul`, `mul_word`, `div_word` round each part of the exact result correctly to nearest.
//! `sqrt` and `log` compute each part with an error of at most 1 ulp.

use astro_float_num::BigFloat;
use astro_float_num::Consts;
use astro_float_num::Exponent;
use astro_float_num::RoundingMode;
use astro_float_num::Word;
use astro_float_num::EXPONENT_MAX;
use astro_float_num::EXPONENT_MIN;
use astro_float_num::WORD_BIT_SIZE;

use crate::common::consts::TWO;
use crate::common::util::checked;
use crate::common::util::exponent;
use crate::common::util::floor_half;
use crate::common::util::mantissa_len;
use crate::common::util::ord;
use crate::defs::Error;
use crate::num::BigComplex;

const RM: RoundingMode = RoundingMode::ToEven;

/// Computes `z^2` with precision `p`.
pub fn sqr(z: &BigComplex, p: usize) -> Result<BigComplex, Error> {
    let (x, y) = (z.re(), z.im());

    // x^2 - y^2 is rounded once, the squares are exact
    let re = x.mul_full_prec(x).sub(&y.mul_full_prec(y), p, RM);

    let im = x.mul(y, p, RM).mul(&TWO, p, RM);

    Ok(BigComplex::from_raw_parts(checked(re)?, checked(im)?, p, p))
}

/// Computes `z * w` with precision `p`.
pub fn mul(z: &BigComplex, w: &BigComplex, p: usize) -> Result<BigComplex, Error> {
    let (a, b) = (z.re(), z.im());
    let (c, d) = (w.re(), w.im());

    let ac = a.mul_full_prec(c);
    let bd = b.mul_full_prec(d);
    let ad = a.mul_full_prec(d);
    let bc = b.mul_full_prec(c);

    let re = ac.sub(&bd, p, RM);
    let im = ad.add(&bc, p, RM);

    Ok(BigComplex::from_raw_parts(checked(re)?, checked(im)?, p, p))
}

/// Computes `z * n` with precision `p`.
pub fn mul_word(z: &BigComplex, n: Word, p: usize) -> Result<BigComplex, Error> {
    let n = BigFloat::from_word(n, WORD_BIT_SIZE);
    let re = z.re().mul(&n, p, RM);
    let im = z.im().mul(&n, p, RM);
    Ok(BigComplex::from_raw_parts(checked(re)?, checked(im)?, p, p))
}

/// Computes `z / n` with precision `p`.
pub fn div_word(z: &BigComplex, n: Word, p: usize) -> Result<BigComplex, Error> {
    if n == 0 {
        return Err(Error::DivisionByZero);
    }
    let n = BigFloat::from_word(n, WORD_BIT_SIZE);
    let re = z.re().div(&n, p, RM);
    let im = z.im().div(&n, p, RM);
    Ok(BigComplex::from_raw_parts(checked(re)?, checked(im)?, p, p))
}

/// Computes the principal square root of `z` with precision `p`.
/// The imaginary part of the result has the sign of the imaginary part of `z`.
pub fn sqrt(z: &BigComplex, p: usize) -> Result<BigComplex, Error> {
    let (x, y) = (z.re(), z.im());

    if x.is_zero() && y.is_zero() {
        let mut im = BigFloat::new(p);
        if y.is_negative() {
            im.inv_sign();
        }
        return Ok(BigComplex::from_raw_parts(BigFloat::new(p), im, p, p));
    }

    let q = p + WORD_BIT_SIZE;

    // sqrt(z) = 2^(k/2) * sqrt(z * 2^-k)
    let k = floor_half(max_exponent(x, y)) * 2;
    let xs = scale(x, -k);
    let ys = scale(y, -k);

    // w = sqrt((|z| + |x|) / 2)
    let n = norm(&xs, &ys, q);
    let r = n.sqrt(q, RM);
    let a = halve(r.add(&xs.abs(), q, RM));
    let w = a.sqrt(q, RM);

    // |y| / (2w)
    let t = halve(ys.abs().div(&w, q, RM));

    let (re, mut im) = if xs.is_negative() { (t, w) } else { (w, t) };
    if y.is_negative() {
        im.inv_sign();
    }

    let mut re = scale(&checked(re)?, k / 2);
    let mut im = scale(&checked(im)?, k / 2);

    re.set_precision(p, RM)?;
    im.set_precision(p, RM)?;

    Ok(BigComplex::from_raw_parts(re, im, p, p))
}

/// Computes the principal logarithm of a nonzero `z` with precision `p`.
/// The imaginary part of the result lies in the interval `(-pi, pi]`.
pub fn log(z: &BigComplex, p: usize, cc: &mut Consts) -> Result<BigComplex, Error> {
    let (x, y) = (z.re(), z.im());

    if x.is_zero() && y.is_zero() {
        return Err(Error::InvalidArgument);
    }

    let q = p + WORD_BIT_SIZE;

    // log|z| = log|z * 2^-k| + k*log(2), scaling applies only to numbers far from 1
    let e = max_exponent(x, y);
    let k = if e > (EXPONENT_MAX / 4) as isize || e < (EXPONENT_MIN / 4) as isize { e } else { 0 };
    let xs = scale(x, -k);
    let ys = scale(y, -k);

    let n = norm(&xs, &ys, q);
    let mut re = halve(n.ln(q, RM, cc));

    if k != 0 {
        let mut kf = BigFloat::from_word(k.unsigned_abs() as Word, WORD_BIT_SIZE);
        if k < 0 {
            kf.inv_sign();
        }
        let c = cc.ln_2(q, RM).mul(&kf, q, RM);
        re = re.add(&c, q, RM);
    }

    let mut re = checked(re)?;
    let mut im = checked(arg(&xs, &ys, q, cc))?;

    re.set_precision(p, RM)?;
    im.set_precision(p, RM)?;

    Ok(BigComplex::from_raw_parts(re, im, p, p))
}

// Argument of x + iy, with |atan| <= pi/4 in every case.
fn arg(x: &BigFloat, y: &BigFloat, q: usize, cc: &mut Consts) -> BigFloat {
    if ord(&y.abs(), &x.abs()) != Some(core::cmp::Ordering::Greater) {
        let a = y.div(x, q, RM).atan(q, RM, cc);
        if x.is_negative() {
            let pi = cc.pi(q, RM);
            if y.is_negative() {
                a.sub(&pi, q, RM)
            } else {
                a.add(&pi, q, RM)
            }
        } else {
            a
        }
    } else {
        let a = x.div(y, q, RM).atan(q, RM, cc);
        let mut h = halve(cc.pi(q, RM));
        if y.is_negative() {
            h.inv_sign();
        }
        h.sub(&a, q, RM)
    }
}

// Sum of squares computed exactly. A part smaller than the other one by more than q bits is
// neglected.
fn norm(x: &BigFloat, y: &BigFloat, q: usize) -> BigFloat {
    let (big, small) = if y.is_zero() || (!x.is_zero() && exponent(x) >= exponent(y)) {
        (x, y)
    } else {
        (y, x)
    };

    if small.is_zero() || exponent(small) < exponent(big) - q as isize - 2 {
        big.mul_full_prec(big)
    } else {
        x.mul_full_prec(x).add_full_prec(&y.mul_full_prec(y))
    }
}

// Largest exponent of the nonzero parts.
fn max_exponent(x: &BigFloat, y: &BigFloat) -> isize {
    match (x.is_zero(), y.is_zero()) {
        (false, false) => exponent(x).max(exponent(y)),
        (false, true) => exponent(x),
        (true, false) => exponent(y),
        (true, true) => 0,
    }
}

// x * 2^k, flushed to zero below the range of exponents.
fn scale(x: &BigFloat, k: isize) -> BigFloat {
    if x.is_zero() || x.is_inf() || x.is_nan() || k == 0 {
        return x.clone();
    }

    let e = exponent(x) + k;
    if e < EXPONENT_MIN as isize {
        let mut z = BigFloat::new(mantissa_len(x));
        if x.is_negative() {
            z.inv_sign();
        }
        z
    } else {
        let mut r = x.clone();
        r.set_exponent(e.min(EXPONENT_MAX as isize) as Exponent);
        r
    }
}

fn halve(x: BigFloat) -> BigFloat {
    scale(&x, -1)
}
