//! Random numbers of different magnitude and precision.

use crate::mpc::common::{assert_complex_eq, get_complex_pair, get_prec_rng, get_random_rnd_pair};
use astro_complex::{BigComplex, Consts, Rounding};
use astro_float_num::{Exponent, EXPONENT_MAX, EXPONENT_MIN};
use gmp_mpfr_sys::{gmp::exp_t, mpfr};
use rand::random;
use rug::{
    float::{exp_max, exp_min},
    Complex,
};

fn compare(z: &BigComplex, c: &Complex, p_re: usize, p_im: usize, cc: &mut Consts) {
    let (rm_re, rnd_re) = get_random_rnd_pair();
    let (rm_im, rnd_im) = get_random_rnd_pair();

    let (w, t) = z
        .asin(p_re, p_im, Rounding::new(rm_re, rm_im), cc)
        .unwrap();

    let (c3, tc) = Complex::with_val_round((p_re as u32, p_im as u32), c.asin_ref(), (rnd_re, rnd_im));

    assert_complex_eq(
        &w,
        t,
        &c3,
        tc,
        &format!("asin({}) {} {} {:?} {:?}", z, p_re, p_im, rm_re, rm_im),
    );
}

#[test]
fn mpc_compare_asin() {
    let run_cnt = 500;

    let p_rng = get_prec_rng();
    let p_min = 2;

    let mut cc = Consts::new().unwrap();

    unsafe {
        mpfr::set_emin(EXPONENT_MIN as exp_t);
        mpfr::set_emax(EXPONENT_MAX as exp_t);
    }

    assert_eq!(EXPONENT_MIN, exp_min());
    assert_eq!(EXPONENT_MAX, exp_max());

    // exponent ranges of the inputs: around one, small, large, mixed
    let ranges: [(Exponent, Exponent); 4] = [(-2, 2), (-60, -10), (10, 60), (-40, 40)];

    for _ in 0..run_cnt {
        for (emin, emax) in ranges {
            let p1 = random::<usize>() % p_rng + p_min;
            let p2 = random::<usize>() % p_rng + p_min;
            let p_re = random::<usize>() % p_rng + p_min;
            let p_im = random::<usize>() % p_rng + p_min;

            let (z, c) = get_complex_pair(p1, p2, emin, emax);

            compare(&z, &c, p_re, p_im, &mut cc);
        }
    }
}

#[test]
fn mpc_compare_asin_low_precision() {
    let run_cnt = 2000;

    let mut cc = Consts::new().unwrap();

    for _ in 0..run_cnt {
        let p1 = random::<usize>() % 64 + 1;
        let p2 = random::<usize>() % 64 + 1;
        let p_re = random::<usize>() % 3 + 2;
        let p_im = random::<usize>() % 3 + 2;

        let (z, c) = get_complex_pair(p1, p2, -5, 5);

        compare(&z, &c, p_re, p_im, &mut cc);
    }
}
