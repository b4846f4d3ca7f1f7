//! Parser of complex numbers written as `(re im)`, or as a single real number.

use core::cmp::Ordering;

use astro_float_num::BigFloat;
use astro_float_num::Radix;
use astro_float_num::RoundingMode;
use astro_float_num::Word;
use astro_float_num::EXPONENT_MAX;
use astro_float_num::EXPONENT_MIN;
use astro_float_num::WORD_BIT_SIZE;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::util::checked;
use crate::common::util::exponent;
use crate::common::util::log2_ceil;
use crate::common::util::mantissa_len;
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
use crate::ops::round::can_round;
use crate::ops::round::round_to_bits;

const RM: RoundingMode = RoundingMode::ToEven;

struct ParserState<'a> {
    s: &'a [u8],
    pos: usize,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            s: s.as_bytes(),
            pos: 0,
        }
    }

    /// Returns the current character in lower case, or None if the string end is reached.
    fn cur_char(&self) -> Option<char> {
        self.s.get(self.pos).map(|c| c.to_ascii_lowercase() as char)
    }

    /// Moves to the next character and returns it.
    fn next_char(&mut self) -> Option<char> {
        if self.pos < self.s.len() {
            self.pos += 1;
        }
        self.cur_char()
    }

    /// Skips whitespace and returns the number of characters skipped.
    fn skip_whitespace(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.cur_char(), Some(c) if c.is_ascii_whitespace()) {
            self.next_char();
        }
        self.pos - start
    }

    fn expect(&mut self, word: &str) -> Result<(), Error> {
        for c in word.chars() {
            if self.cur_char() != Some(c) {
                return Err(Error::InvalidArgument);
            }
            self.next_char();
        }
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.s.len() - self.pos
    }
}

/// A real number as it is written: the sign, the digits of an integer `m` without leading zeroes,
/// and the exponent `e` of the value `m * rdx^e`.
#[derive(Debug, PartialEq)]
enum Literal {
    Num { neg: bool, digits: Vec<u8>, e: isize },
    Inf(bool),
    Nan,
}

impl Literal {
    fn zero() -> Self {
        Literal::Num {
            neg: false,
            digits: Vec::new(),
            e: 0,
        }
    }

    /// Returns the value correctly rounded to precision `p` using the rounding mode `rm`,
    /// and its ternary value.
    fn to_big_float(
        &self,
        rdx: Radix,
        p: usize,
        rm: RoundingMode,
    ) -> Result<(BigFloat, Ordering), Error> {
        match self {
            Literal::Nan => Ok((astro_float_num::NAN, Ordering::Equal)),
            Literal::Inf(false) => Ok((astro_float_num::INF_POS, Ordering::Equal)),
            Literal::Inf(true) => Ok((astro_float_num::INF_NEG, Ordering::Equal)),
            Literal::Num { neg, digits, e } => {
                if digits.is_empty() {
                    let mut z = BigFloat::new(p);
                    if *neg {
                        z.inv_sign();
                    }
                    return Ok((z, Ordering::Equal));
                }

                // the magnitude is rounded, the sign is applied after
                let rm_abs = if *neg { invert_rm_for_sign(rm) } else { rm };

                let m = integer(digits, rdx)?;
                let (mut x, mut t) = match rdx {
                    Radix::Dec => scale_pow10(&m, *e, p, rm_abs)?,
                    _ => scale_pow2(m, e.saturating_mul(digit_bits(rdx) as isize), p, rm_abs)?,
                };

                if *neg {
                    x.inv_sign();
                    t = t.reverse();
                }

                Ok((x, t))
            }
        }
    }
}

fn digit_bits(rdx: Radix) -> usize {
    match rdx {
        Radix::Bin => 1,
        Radix::Oct => 3,
        Radix::Dec | Radix::Hex => 4,
    }
}

fn radix_digit(c: char, rdx: Radix) -> Option<u8> {
    c.to_digit(rdx as u32).map(|d| d as u8)
}

fn parse_real(ps: &mut ParserState, rdx: Radix) -> Result<Literal, Error> {
    ps.skip_whitespace();

    let mut neg = false;
    match ps.cur_char() {
        Some('+') => {
            ps.next_char();
        }
        Some('-') => {
            neg = true;
            ps.next_char();
        }
        _ => {}
    };

    match ps.cur_char() {
        Some('i') => {
            ps.expect("inf")?;
            Ok(Literal::Inf(neg))
        }
        Some('n') => {
            ps.expect("nan")?;
            Ok(Literal::Nan)
        }
        _ => parse_num(ps, rdx, neg),
    }
}

fn parse_num(ps: &mut ParserState, rdx: Radix, neg: bool) -> Result<Literal, Error> {
    let mut digits = Vec::new();
    digits.try_reserve_exact(ps.remaining())?;

    let mut cnt = 0;
    let mut frac_len: isize = 0;
    let mut frac = false;

    loop {
        match ps.cur_char() {
            Some('.') if !frac => frac = true,
            Some(c) => match radix_digit(c, rdx) {
                Some(d) => {
                    // leading zeroes
                    if d != 0 || !digits.is_empty() {
                        digits.push(d);
                    }
                    if frac {
                        frac_len += 1;
                    }
                    cnt += 1;
                }
                None => break,
            },
            None => break,
        }
        ps.next_char();
    }

    if cnt == 0 {
        return Err(Error::InvalidArgument);
    }

    let mut e = 0;
    if rdx == Radix::Hex {
        if ps.cur_char() == Some('_') {
            ps.next_char();
            ps.expect("e")?;
            e = parse_exp(ps, rdx);
        }
    } else if ps.cur_char() == Some('e') {
        ps.next_char();
        e = parse_exp(ps, rdx);
    }

    Ok(Literal::Num {
        neg,
        digits,
        e: e.saturating_sub(frac_len),
    })
}

fn parse_exp(ps: &mut ParserState, rdx: Radix) -> isize {
    let mut neg = false;
    match ps.cur_char() {
        Some('+') => {
            ps.next_char();
        }
        Some('-') => {
            neg = true;
            ps.next_char();
        }
        _ => {}
    };

    let mut e: isize = 0;
    while let Some(d) = ps.cur_char().and_then(|c| radix_digit(c, rdx)) {
        e = e.saturating_mul(rdx as isize).saturating_add(d as isize);
        ps.next_char();
    }

    if neg {
        -e
    } else {
        e
    }
}

// Exact value of the digits as an integer.
fn integer(digits: &[u8], rdx: Radix) -> Result<BigFloat, Error> {
    let p = round_p(digits.len() * digit_bits(rdx) + 1);
    let base = BigFloat::from_word(rdx as Word, WORD_BIT_SIZE);

    let mut m = BigFloat::new(p);
    for &d in digits {
        m = checked(m.mul(&base, p, RM))?;
        m = checked(m.add(&BigFloat::from_word(d as Word, WORD_BIT_SIZE), p, RM))?;
    }

    Ok(m)
}

// Positive `m * 2^k` rounded to `p` bits.
fn scale_pow2(
    m: BigFloat,
    k: isize,
    p: usize,
    rm: RoundingMode,
) -> Result<(BigFloat, Ordering), Error> {
    let (x, t) = round_to_bits(&m, p, rm)?;
    Ok(ExponentRange::full().check_range_scaled(x, k, p, t, rm))
}

// Positive `m * 10^e` rounded to `p` bits.
fn scale_pow10(
    m: &BigFloat,
    e: isize,
    p: usize,
    rm: RoundingMode,
) -> Result<(BigFloat, Ordering), Error> {
    if e == 0 {
        return round_to_bits(m, p, rm);
    }

    let k = e.unsigned_abs();
    let em = exponent(m);

    // 10^k > 2^(3.321*k)
    let shift = (k.saturating_mul(3321) / 1000).min(isize::MAX as usize) as isize;
    if e > 0 && em.saturating_add(shift) > EXPONENT_MAX as isize {
        return Ok(ExponentRange::full().overflow(false, p, rm));
    }
    // below half of the smallest normal number
    if e < 0 && em.saturating_sub(shift) < EXPONENT_MIN as isize - 1 {
        return Ok(ExponentRange::full().underflow(false, p, rm));
    }

    // the computation is performed on m moved to [1/2, 1), the exponents are applied on clamping
    let mut ms = m.clone();
    ms.set_exponent(0);

    // m * 10^e is representable with p bits only if 5^k fits in the larger of p and the length of m
    let (x, pe, t) = if k.saturating_mul(2) <= p.max(mantissa_len(m)) + WORD_BIT_SIZE {
        scale_pow10_exact(&ms, e, k, p, rm)?
    } else {
        scale_pow10_approx(&ms, e, k, p, rm)?
    };

    let shift = if e > 0 { em + pe } else { em - pe };
    Ok(ExponentRange::full().check_range_scaled(x, shift, p, t, rm))
}

// `m * 10^e` rounded to `p` bits is `x * 2^(+-pe)`, returns x, pe and the ternary value.
fn scale_pow10_exact(
    m: &BigFloat,
    e: isize,
    k: usize,
    p: usize,
    rm: RoundingMode,
) -> Result<(BigFloat, isize, Ordering), Error> {
    let (pw, pe, _) = pow10(k, round_p(4 * k + 1))?;

    if e > 0 {
        let v = checked(m.mul_full_prec(&pw))?;
        let (x, t) = round_to_bits(&v, p, rm)?;
        return Ok((x, pe, t));
    }

    let mut wp = round_p(p) + WORD_BIT_SIZE;
    loop {
        let v = checked(m.div(&pw, wp, RM))?;

        let exact = ord(&v.mul_full_prec(&pw), m) == Some(Ordering::Equal);
        if exact || can_round(&v, ErrorBound::Ulp(-1), p, rm) {
            let (x, t) = round_to_bits(&v, p, rm)?;
            return Ok((x, pe, t));
        }

        wp += wp / 2;
    }
}

fn scale_pow10_approx(
    m: &BigFloat,
    e: isize,
    k: usize,
    p: usize,
    rm: RoundingMode,
) -> Result<(BigFloat, isize, Ordering), Error> {
    let mut wp = round_p(p + log2_ceil(k) + 2) + WORD_BIT_SIZE;

    loop {
        let (pw, pe, ops) = pow10(k, wp)?;

        let v = if e > 0 {
            checked(m.mul(&pw, wp, RM))?
        } else {
            checked(m.div(&pw, wp, RM))?
        };

        // relative error of the power grows with k and the number of roundings
        let err = ErrorBound::Ulp(log2_ceil(k + ops + 2) as isize + 2);
        if can_round(&v, err, p, rm) {
            let (x, t) = round_to_bits(&v, p, rm)?;
            return Ok((x, pe, t));
        }

        wp += wp / 2;
    }
}

// 10^k = x * 2^e with x in [1/2, 1) computed with precision `p`.
// Returns x, e and the number of roundings performed.
fn pow10(mut k: usize, p: usize) -> Result<(BigFloat, isize, usize), Error> {
    let mut acc = BigFloat::from_word(1, p);
    let mut acc_e = normalize(&mut acc);
    let mut base = BigFloat::from_word(10, p);
    let mut base_e = normalize(&mut base);
    let mut ops = 0;

    while k > 0 {
        if k & 1 == 1 {
            acc = checked(acc.mul(&base, p, RM))?;
            acc_e += base_e + normalize(&mut acc);
            ops += 1;
        }
        k >>= 1;
        if k > 0 {
            base = checked(base.mul(&base, p, RM))?;
            base_e += base_e + normalize(&mut base);
            ops += 1;
        }
    }

    Ok((acc, acc_e, ops))
}

// Moves x to [1/2, 1) and returns its former exponent.
fn normalize(x: &mut BigFloat) -> isize {
    let e = exponent(x);
    x.set_exponent(0);
    e
}

/// Parses the real number `s` in decimal radix correctly rounded to precision `p` using the
/// rounding mode `rm`. The string must contain nothing but the number and whitespace around it.
#[cfg(feature = "serde")]
pub(crate) fn parse_part(s: &str, p: usize, rm: RoundingMode) -> Result<(BigFloat, Ordering), Error> {
    if p == 0 {
        return Err(Error::InvalidArgument);
    }

    let mut ps = ParserState::new(s);
    let lit = parse_real(&mut ps, Radix::Dec)?;
    ps.skip_whitespace();

    if ps.remaining() > 0 {
        return Err(Error::InvalidArgument);
    }

    lit.to_big_float(Radix::Dec, p, rm)
}

impl BigComplex {
    /// Parses a complex number from the string `s` using radix `rdx`. The real part is rounded to
    /// precision `p_re` and the imaginary part to precision `p_im` using the rounding modes `rm`,
    /// and the result is clamped to the exponent range of the context.
    ///
    /// The string contains either a pair of real numbers in parentheses separated by whitespace,
    /// like `(1.5 -2e-3)`, or a single real number, in which case the imaginary part is positive
    /// zero. Leading and trailing whitespace is skipped. Real numbers consist of an optional sign,
    /// digits with an optional fractional part, and an optional exponent starting with `e`,
    /// or `_e` for hexadecimal radix. `inf` and `nan` are accepted in any case.
    ///
    /// Returns the number, the ternary values of its parts, and the number of bytes of `s`
    /// consumed.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: failed to parse input, the precision is zero, or the rounding mode is
    ///    invalid.
    ///  - MemoryAllocation: failed to allocate memory.
    pub fn parse<C: Contextable>(
        s: &str,
        rdx: Radix,
        p_re: usize,
        p_im: usize,
        rm: Rounding,
        ctx: &mut C,
    ) -> Result<(BigComplex, Inexact, usize), Error> {
        rm.validate()?;

        if p_re == 0 || p_im == 0 {
            return Err(Error::InvalidArgument);
        }

        let mut ps = ParserState::new(s);
        ps.skip_whitespace();

        let (re, im) = if ps.cur_char() == Some('(') {
            ps.next_char();

            let re = parse_real(&mut ps, rdx)?;
            if ps.skip_whitespace() == 0 {
                return Err(Error::InvalidArgument);
            }

            let im = parse_real(&mut ps, rdx)?;
            ps.expect(")")?;

            (re, im)
        } else {
            (parse_real(&mut ps, rdx)?, Literal::zero())
        };

        ps.skip_whitespace();

        let (re, t_re) = re.to_big_float(rdx, p_re, rm.re)?;
        let (im, t_im) = im.to_big_float(rdx, p_im, rm.im)?;

        let range = ctx.exponent_range();
        let (re, t_re) = range.check_range(re, p_re, t_re, rm.re);
        let (im, t_im) = range.check_range(im, p_im, t_im, rm.im);

        Ok((BigComplex::from_raw_parts(re, im, p_re, p_im), (t_re, t_im), ps.pos))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ctx::Context;
    use crate::defs::EXACT;
    use astro_float_num::Consts;

    #[cfg(not(feature = "std"))]
    use {alloc::format, alloc::string::String, alloc::vec};

    fn real(s: &str, rdx: Radix) -> Literal {
        let mut ps = ParserState::new(s);
        parse_real(&mut ps, rdx).unwrap()
    }

    #[test]
    fn test_parser() {
        let mantissas = ["0.0", "0", ".000", "00.", "000123", "456.", "789.012", ".3456", "0.0078"];
        let expected_digits = [
            vec![],
            vec![],
            vec![],
            vec![],
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9, 0, 1, 2],
            vec![3, 4, 5, 6],
            vec![7, 8],
        ];
        let expected_shifts = [-1, 0, -3, 0, 0, 0, -3, -4, -4];

        let signs = ["", "+", "-"];
        let exponents = ["", "E", "e", "e123", "e+345", "e-678", "E-567"];
        let expected_exponents = [0, 0, 0, 123, 345, -678, -567];

        for (i, s) in signs.iter().enumerate() {
            for (j, m) in mantissas.iter().enumerate() {
                for (k, e) in exponents.iter().enumerate() {
                    let numstr = String::from(*s) + m + e;
                    let lit = real(&numstr, Radix::Dec);
                    assert_eq!(
                        lit,
                        Literal::Num {
                            neg: i == 2,
                            digits: expected_digits[j].clone(),
                            e: expected_exponents[k] + expected_shifts[j],
                        },
                        "{}",
                        numstr
                    );
                }
            }
        }

        for s in ["inf", "INF", "+Inf"] {
            assert_eq!(real(s, Radix::Dec), Literal::Inf(false));
        }
        assert_eq!(real("-inf", Radix::Hex), Literal::Inf(true));
        for s in ["nan", "NaN", "-NAN"] {
            assert_eq!(real(s, Radix::Dec), Literal::Nan);
        }

        assert_eq!(
            real("1aF.8_e-2", Radix::Hex),
            Literal::Num {
                neg: false,
                digits: vec![1, 10, 15, 8],
                e: -3
            }
        );
        assert_eq!(
            real("-101.1e11", Radix::Bin),
            Literal::Num {
                neg: true,
                digits: vec![1, 0, 1, 1],
                e: 2
            }
        );

        for s in ["", ".", "-", "in", "na", "e5", "+.e1"] {
            let mut ps = ParserState::new(s);
            assert!(parse_real(&mut ps, Radix::Dec).is_err(), "{}", s);
        }
    }

    #[test]
    fn test_parse() {
        let mut cc = Consts::new().unwrap();
        let rm = Rounding::default();

        let (z, t, n) = BigComplex::parse("(1.5 -2.25)", Radix::Dec, 64, 64, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(1.5, -2.25)));
        assert_eq!(t, EXACT);
        assert_eq!(n, 11);

        // single real number, whitespace around
        let s = "  -0.125e1 \t";
        let (z, t, n) = BigComplex::parse(s, Radix::Dec, 64, 64, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(-1.25, 0.0)));
        assert_eq!(t, EXACT);
        assert_eq!(n, s.len());

        // trailing characters are not consumed
        let s = "(inf -nan)xyz";
        let (z, t, n) = BigComplex::parse(s, Radix::Dec, 64, 64, rm, &mut cc).unwrap();
        assert!(z.re().is_inf_pos());
        assert!(z.im().is_nan());
        assert_eq!(t, EXACT);
        assert_eq!(n, 10);

        // signed zeroes
        let (z, _, _) = BigComplex::parse("(-0 -0.0e7)", Radix::Dec, 64, 64, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(-0.0, -0.0)));

        // other radixes
        let (z, t, _) = BigComplex::parse("(-1a.8 1_e-1)", Radix::Hex, 64, 64, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(-26.5, 0.0625)));
        assert_eq!(t, EXACT);
        let (z, _, _) = BigComplex::parse("(0.11e10 -17)", Radix::Oct, 64, 64, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(2359296.0, -15.0)));
        let (z, _, _) = BigComplex::parse("( 1.1 -1e-10)", Radix::Bin, 64, 64, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(1.5, -0.25)));

        // malformed input
        for s in ["", "(1 2", "(1,2)", "(1  2 )", "(12)", "( )", "abc", "(1 2 3)", "1.5_e2"] {
            assert_eq!(
                BigComplex::parse(s, Radix::Dec, 64, 64, rm, &mut cc).map(|(_, _, n)| n),
                if s == "1.5_e2" { Ok(3) } else { Err(Error::InvalidArgument) },
                "{}",
                s
            );
        }

        assert!(BigComplex::parse("1", Radix::Dec, 0, 64, rm, &mut cc).is_err());
        assert!(BigComplex::parse("1", Radix::Dec, 64, 64, Rounding::both(RoundingMode::None), &mut cc)
            .is_err());
    }

    #[test]
    fn test_parse_rounding() {
        let mut cc = Consts::new().unwrap();
        let p = 53;

        // 0.1 is not representable in binary
        for (s, f) in [("0.1", 0.1f64), ("-3.3e-5", -3.3e-5), ("123456789.987654321e100", 123456789.987654321e100)] {
            for rm in [RoundingMode::ToEven, RoundingMode::Up, RoundingMode::Down, RoundingMode::ToZero, RoundingMode::FromZero] {
                let (z, t, _) = BigComplex::parse(s, Radix::Dec, p, p, Rounding::new(rm, rm), &mut cc).unwrap();
                assert_ne!(t.0, Ordering::Equal);
                assert_eq!(t.1, Ordering::Equal);

                // the parsed value and the value of the f64 literal are neighbours or equal
                let d = z.re().sub(&BigFloat::from_f64(f, p), 128, RM).abs();
                assert!(d.is_zero() || exponent(&d) <= exponent(z.re()) - p as isize + 1);

                match rm {
                    RoundingMode::ToEven => assert_eq!(z.re(), &BigFloat::from_f64(f, p)),
                    RoundingMode::Up => assert_eq!(t.0, Ordering::Greater),
                    RoundingMode::Down => assert_eq!(t.0, Ordering::Less),
                    RoundingMode::ToZero => assert_eq!(t.0, if f > 0.0 { Ordering::Less } else { Ordering::Greater }),
                    _ => assert_eq!(t.0, if f > 0.0 { Ordering::Greater } else { Ordering::Less }),
                }
            }
        }

        // exact decimal values
        let rm = Rounding::both(RoundingMode::Down);
        let (z, t, _) = BigComplex::parse("(1500e-3 25e-2)", Radix::Dec, p, p, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(1.5, 0.25)));
        assert_eq!(t, EXACT);
        let (z, t, _) = BigComplex::parse("(12e3 -0.5e1)", Radix::Dec, p, p, rm, &mut cc).unwrap();
        assert!(z.bit_eq(&BigComplex::from_f64(12000.0, -5.0)));
        assert_eq!(t, EXACT);

        // large exponents go through the approximate power of ten
        let (z, t, _) = BigComplex::parse("(1e-300 -7e250)", Radix::Dec, p, p, Rounding::default(), &mut cc).unwrap();
        assert_eq!(z.re(), &BigFloat::from_f64(1e-300, p));
        assert_eq!(z.im(), &BigFloat::from_f64(-7e250, p));
        assert_ne!(t.0, Ordering::Equal);
        assert_ne!(t.1, Ordering::Equal);

        // overflow and underflow of the exponent
        let (z, t, _) = BigComplex::parse("(1e9999999999 -1e-9999999999)", Radix::Dec, p, p, Rounding::default(), &mut cc).unwrap();
        assert!(z.re().is_inf_pos());
        assert!(z.im().is_zero() && z.im().is_negative());
        assert_eq!(t, (Ordering::Greater, Ordering::Greater));

        let rm = Rounding::both(RoundingMode::ToZero);
        let (z, _, _) = BigComplex::parse("(-1e9999999999 1)", Radix::Dec, p, p, rm, &mut cc).unwrap();
        assert!(z.re().is_negative() && !z.re().is_inf());
    }

    #[test]
    fn test_parse_near_min_exponent() {
        let mut cc = Consts::new().unwrap();
        let p = 53;

        let mut min = BigFloat::from_word(1, p);
        min.set_exponent(EXPONENT_MIN);

        // 6 * 16^-n = 3/4 of the smallest normal number
        let n = (4 - EXPONENT_MIN as i64) / 4;
        let s = format!("(6_e-{:x} -6_e-{:x})", n, n);
        let (z, t, _) = BigComplex::parse(&s, Radix::Hex, p, p, Rounding::default(), &mut cc).unwrap();
        assert_eq!(z.re(), &min);
        assert_eq!(z.im(), &-&min);
        assert_eq!(t, (Ordering::Greater, Ordering::Less));

        let rm = Rounding::both(RoundingMode::ToZero);
        let (z, t, _) = BigComplex::parse(&s, Radix::Hex, p, p, rm, &mut cc).unwrap();
        assert!(z.re().is_zero() && z.im().is_zero() && z.im().is_negative());
        assert_eq!(t, (Ordering::Less, Ordering::Greater));

        // 1/4 of the smallest normal number
        let s = format!("2_e-{:x}", n);
        let (z, t, _) = BigComplex::parse(&s, Radix::Hex, p, p, Rounding::default(), &mut cc).unwrap();
        assert!(z.re().is_zero());
        assert_eq!(t.0, Ordering::Less);

        // the smallest normal number itself is in range
        let s = format!("8_e-{:x}", n);
        let (z, t, _) = BigComplex::parse(&s, Radix::Hex, p, p, Rounding::default(), &mut cc).unwrap();
        assert_eq!(z.re(), &min);
        assert_eq!(t.0, Ordering::Equal);

        // the smallest normal number is about 2.838e-646456994
        if EXPONENT_MIN == astro_float_num::Exponent::MIN {
            let (z, t, _) = BigComplex::parse("(2.1e-646456994 1.4e-646456994)", Radix::Dec, p, p, Rounding::default(), &mut cc).unwrap();
            assert_eq!(z.re(), &min);
            assert_eq!(t.0, Ordering::Greater);
            assert!(z.im().is_zero());
            assert_eq!(t.1, Ordering::Less);

            let rm = Rounding::both(RoundingMode::Up);
            let (z, _, _) = BigComplex::parse("(1e-646456995 -1e-646456995)", Radix::Dec, p, p, rm, &mut cc).unwrap();
            assert_eq!(z.re(), &min);
            assert!(z.im().is_zero() && z.im().is_negative());
        }
    }

    #[test]
    fn test_parse_exponent_range() {
        let cc = Consts::new().unwrap();
        let range = ExponentRange::new(-10, 10).unwrap();
        let mut ctx = Context::with_exponent_range(cc, range);

        let rm = Rounding::new(RoundingMode::ToEven, RoundingMode::Up);
        let (z, t, _) = BigComplex::parse("(1e10 1e-10)", Radix::Dec, 32, 32, rm, &mut ctx).unwrap();
        assert!(z.re().is_inf_pos());
        assert_eq!(t.0, Ordering::Greater);

        // rounded up to the smallest number of the range
        let mut min = BigFloat::from_word(1, 32);
        min.set_exponent(-10);
        assert_eq!(z.im(), &min);
        assert_eq!(t.1, Ordering::Greater);
    }
}
