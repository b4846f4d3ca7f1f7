//! Special values, points near the branch points, and points on the axes.

use crate::mpc::common::{assert_complex_eq, conv_to_mpc, get_prec_rng, get_random_rnd_pair};
use astro_complex::{BigComplex, Consts, Rounding};
use astro_float_num::{BigFloat, Exponent, RoundingMode};
use rand::random;
use rug::Complex;

fn pow2(e: Exponent, p: usize) -> BigFloat {
    let mut x = BigFloat::from_word(1, p);
    x.set_exponent(e + 1);
    x
}

fn neg(x: &BigFloat) -> BigFloat {
    let mut y = x.clone();
    y.inv_sign();
    y
}

#[test]
fn mpc_compare_special() {
    let run_cnt = 200;

    let p_rng = get_prec_rng();
    let p_min = 2;

    let mut cc = Consts::new().unwrap();

    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let p_re = random::<usize>() % p_rng + p_min;
        let p_im = random::<usize>() % p_rng + p_min;

        let tiny = pow2(-((random::<usize>() % 200) as Exponent) - 2, p1);
        let one = BigFloat::from_word(1, p1);
        let half = pow2(-1, p1);
        let big = BigFloat::from_f64(2.5, p1).mul(
            &pow2((random::<usize>() % 100) as Exponent, p1),
            p1,
            RoundingMode::ToEven,
        );

        let nn = [
            BigFloat::new(p1),
            neg(&BigFloat::new(p1)),
            one.clone(),
            neg(&one),
            half.clone(),
            neg(&half),
            tiny.clone(),
            neg(&tiny),
            big.clone(),
            neg(&big),
            astro_float_num::INF_POS,
            astro_float_num::INF_NEG,
            astro_float_num::NAN,
        ];

        for x in nn.iter() {
            for y in nn.iter() {
                let z = BigComplex::from_parts(x.clone(), y.clone());
                let c = conv_to_mpc(&z);

                let (rm_re, rnd_re) = get_random_rnd_pair();
                let (rm_im, rnd_im) = get_random_rnd_pair();

                let (w, t) = z
                    .asin(p_re, p_im, Rounding::new(rm_re, rm_im), &mut cc)
                    .unwrap();

                let (c3, tc) =
                    Complex::with_val_round((p_re as u32, p_im as u32), c.asin_ref(), (rnd_re, rnd_im));

                assert_complex_eq(
                    &w,
                    t,
                    &c3,
                    tc,
                    &format!("asin({}) {} {} {:?} {:?}", z, p_re, p_im, rm_re, rm_im),
                );
            }
        }
    }
}
