//! Components used in MPC integration tests

use core::cmp::Ordering;

use astro_complex::BigComplex;
use astro_float_num::{BigFloat, Exponent, Radix, RoundingMode};
use rand::random;
use rug::float::Round;
use rug::{Complex, Float};

pub const fn get_prec_rng() -> usize {
    #[cfg(not(debug_assertions))]
    {
        1000
    }

    #[cfg(debug_assertions)]
    {
        150
    }
}

pub fn get_complex_pair(
    p_re: usize,
    p_im: usize,
    emin: Exponent,
    emax: Exponent,
) -> (BigComplex, Complex) {
    let z = BigComplex::random_normal(p_re, p_im, emin, emax);
    let c = conv_to_mpc(&z);
    (z, c)
}

pub fn conv_to_mpc(z: &BigComplex) -> Complex {
    let (p_re, p_im) = z.precision();
    let re = conv_to_mpfr(p_re, z.re());
    let im = conv_to_mpfr(p_im, z.im());
    Complex::with_val((p_re as u32, p_im as u32), (re, im))
}

pub fn conv_to_mpfr(p: usize, n: &BigFloat) -> Float {
    if n.is_nan() {
        Float::with_val(p as u32, rug::float::Special::Nan)
    } else if n.is_inf() {
        if n.is_negative() {
            Float::with_val(p as u32, rug::float::Special::NegInfinity)
        } else {
            Float::with_val(p as u32, rug::float::Special::Infinity)
        }
    } else if n.is_zero() {
        if n.is_negative() {
            Float::with_val(p as u32, rug::float::Special::NegZero)
        } else {
            Float::with_val(p as u32, rug::float::Special::Zero)
        }
    } else {
        let s1 = conv_str_to_mpfr_compat(format!("{:b}", n));
        let f = Float::with_val(p as u32, Float::parse_radix(s1, 2).unwrap());
        let s2 = conv_str_from_mpfr_compat(f.to_string_radix(2, None));
        assert_eq!(*n, BigFloat::parse(&s2, Radix::Bin, p, RoundingMode::None));
        f
    }
}

pub fn conv_from_mpfr(p: usize, f: &Float) -> BigFloat {
    if f.is_nan() {
        astro_float_num::NAN
    } else if f.is_infinite() {
        if f.is_sign_negative() {
            astro_float_num::INF_NEG
        } else {
            astro_float_num::INF_POS
        }
    } else if f.is_zero() {
        let mut z = BigFloat::new(p);
        if f.is_sign_negative() {
            z.inv_sign();
        }
        z
    } else {
        let s = conv_str_from_mpfr_compat(f.to_string_radix(2, None));
        BigFloat::parse(&s, Radix::Bin, p, RoundingMode::None)
    }
}

// assert the parts and the ternary values are equal.
pub fn assert_complex_eq(w: &BigComplex, t: (Ordering, Ordering), c: &Complex, tc: (Ordering, Ordering), op: &str) {
    let (p_re, p_im) = w.precision();

    assert_float_eq(w.re(), c.real(), p_re, op);
    assert_float_eq(w.im(), c.imag(), p_im, op);

    if !w.is_nan() {
        assert_eq!(t, tc, "{}", op);
    }
}

fn assert_float_eq(n: &BigFloat, f: &Float, p: usize, op: &str) {
    if f.is_nan() {
        assert!(n.is_nan(), "{}", op);
    } else {
        let n2 = conv_from_mpfr(p, f);
        assert_eq!(*n, n2, "{}", op);
        assert_eq!(n.is_negative(), n2.is_negative(), "{}", op);
        assert_eq!(n.is_inf(), n2.is_inf(), "{}", op);
    }
}

pub fn conv_str_to_mpfr_compat(s: String) -> String {
    let (sig, exp) = if let Some(pos) = s.find('e') {
        s.split_at(pos + 1)
    } else {
        (s.as_str(), "0")
    };
    let expn = i64::from_str_radix(exp, 2).unwrap();
    sig.to_owned() + &expn.to_string()
}

pub fn conv_str_from_mpfr_compat(s: String) -> String {
    if let Some(epos) = s.find('e') {
        let (sig, exp) = s.split_at(epos + 1);
        let expn = exp.parse::<i64>().unwrap();
        if expn < 0 {
            sig.to_owned() + "-" + &format!("{:b}", -expn)
        } else {
            sig.to_owned() + &format!("{:b}", expn)
        }
    } else {
        s
    }
}

pub fn get_random_rnd_pair() -> (RoundingMode, Round) {
    match random::<u8>() % 5 {
        0 => (RoundingMode::ToEven, Round::Nearest),
        1 => (RoundingMode::Up, Round::Up),
        2 => (RoundingMode::Down, Round::Down),
        3 => (RoundingMode::ToZero, Round::Zero),
        4 => (RoundingMode::FromZero, Round::AwayZero),
        _ => unreachable!(),
    }
}
