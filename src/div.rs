use crate::{classic, newton, Magnitude};

/// Division algorithm choice. `AutoNewton` resolves to one of the other
/// two from the divisor's bit length before anything runs; all three
/// produce identical results at every operand size, only the cost
/// profiles differ.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DivisionMode {
    Classic,
    Newton,
    AutoNewton,
}

/// Divisor bit length at which `AutoNewton` switches from classic long
/// division to the reciprocal method. Empirically tuned, not derived;
/// recalibrate per platform (and per multiplication engine) with
/// `benches/division.rs` and pass the result to
/// [`div_mod_with_threshold`].
pub const NEWTON_THRESHOLD: u64 = 4096;

/// Quotient and remainder of `u / d`.
///
/// Every mode satisfies `u == q*d + r` with `r < d`. Panics on a zero
/// divisor, before any algorithm is dispatched.
pub fn div_mod(u: &Magnitude, d: &Magnitude, mode: DivisionMode) -> (Magnitude, Magnitude) {
    div_mod_with_threshold(u, d, mode, NEWTON_THRESHOLD)
}

/// [`div_mod`] with a caller-calibrated `AutoNewton` crossover.
pub fn div_mod_with_threshold(
    u: &Magnitude,
    d: &Magnitude,
    mode: DivisionMode,
    threshold_bits: u64,
) -> (Magnitude, Magnitude) {
    if d.is_zero() {
        panic!("division by zero");
    }

    // A short dividend settles the outcome without either algorithm.
    if u < d {
        return (Magnitude::zero(), u.clone());
    }

    match mode {
        DivisionMode::Classic => classic::div_rem(u, d),
        DivisionMode::Newton => newton::div_rem(u, d),
        DivisionMode::AutoNewton => {
            if d.bit_length() < threshold_bits {
                classic::div_rem(u, d)
            } else {
                newton::div_rem(u, d)
            }
        }
    }
}

impl std::ops::Div<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    #[inline]
    fn div(self, other: &Magnitude) -> Magnitude {
        div_mod(self, other, DivisionMode::AutoNewton).0
    }
}

impl std::ops::Rem<&Magnitude> for &Magnitude {
    type Output = Magnitude;

    #[inline]
    fn rem(self, other: &Magnitude) -> Magnitude {
        div_mod(self, other, DivisionMode::AutoNewton).1
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rand::Rng;

    use super::*;
    use crate::{random_magnitude, rng};

    const MODES: [DivisionMode; 3] = [
        DivisionMode::Classic,
        DivisionMode::Newton,
        DivisionMode::AutoNewton,
    ];

    #[test]
    fn modes_agree() {
        let mut rng = rng();

        for _ in 0..30 {
            let u_len = 1 + rng.gen::<usize>() % 20;
            let d_len = 1 + rng.gen::<usize>() % 12;

            let u = random_magnitude(&mut rng, u_len);
            let d = random_magnitude(&mut rng, d_len);

            if d.is_zero() {
                continue;
            }

            let results: Vec<_> = MODES.iter().map(|&m| div_mod(&u, &d, m)).collect();

            assert_eq!(results[0], results[1]);
            assert_eq!(results[0], results[2]);

            let (q, r) = &results[0];
            assert_eq!(&q.mul(&d).add(r), &u);
            assert!(*r < d);
        }
    }

    #[test]
    fn modes_agree_on_huge_all_ones() {
        // 1024-word dividend over 512-word divisor, every word saturated.
        let u = Magnitude::from_words(vec![u32::MAX; 1024]);
        let d = Magnitude::from_words(vec![u32::MAX; 512]);

        let classic = div_mod(&u, &d, DivisionMode::Classic);
        let auto = div_mod(&u, &d, DivisionMode::AutoNewton);

        assert_eq!(classic, auto);
        assert_eq!(&classic.0.mul(&d).add(&classic.1), &u);
    }

    #[test]
    fn equal_operands_give_one_and_zero() {
        for words in [1, 3, 64] {
            let n = Magnitude::from_words(vec![0xC0FFEE; words]);

            for mode in MODES {
                let (q, r) = div_mod(&n, &n, mode);
                assert_eq!(q, Magnitude::one());
                assert!(r.is_zero());
            }
        }
    }

    #[test]
    fn short_dividend_short_circuits() {
        let u = Magnitude::from_words(vec![1, 2, 3]);
        let d = Magnitude::from_words(vec![1, 2, 3, 4]);

        for mode in MODES {
            // Forcing a zero threshold would route to Newton; the selector
            // must settle short dividends before dispatching at all.
            let (q, r) = div_mod_with_threshold(&u, &d, mode, 0);
            assert!(q.is_zero());
            assert_eq!(r, u);
        }
    }

    #[test]
    fn zero_dividend() {
        for mode in MODES {
            let (q, r) = div_mod(&Magnitude::zero(), &Magnitude::from_u32(7), mode);
            assert!(q.is_zero());
            assert!(r.is_zero());
        }
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn zero_divisor_panics() {
        let _ = div_mod(
            &Magnitude::from_u32(1),
            &Magnitude::zero(),
            DivisionMode::Classic,
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn zero_divisor_panics_before_auto_resolution() {
        let _ = div_mod(
            &Magnitude::zero(),
            &Magnitude::zero(),
            DivisionMode::AutoNewton,
        );
    }

    #[test]
    fn threshold_routes_modes() {
        let u = Magnitude::from_words(vec![9; 8]);
        let d = Magnitude::from_words(vec![5; 4]);

        // Both routes must agree regardless of where the crossover sits.
        let low = div_mod_with_threshold(&u, &d, DivisionMode::AutoNewton, 0);
        let high = div_mod_with_threshold(&u, &d, DivisionMode::AutoNewton, u64::MAX);

        assert_eq!(low, high);
    }

    #[test]
    fn implements_operators() {
        let u = Magnitude::from_u64(1 << 40);
        let d = Magnitude::from_u32(3);

        assert_eq!(&u / &d, Magnitude::from_u64((1 << 40) / 3));
        assert_eq!(&u % &d, Magnitude::from_u32(1));
    }

    #[quickcheck]
    fn qc_modes_agree(u: Magnitude, d: Magnitude) -> TestResult {
        if d.is_zero() {
            return TestResult::discard();
        }

        let classic = div_mod(&u, &d, DivisionMode::Classic);
        let newton = div_mod(&u, &d, DivisionMode::Newton);

        TestResult::from_bool(classic == newton)
    }

    #[quickcheck]
    fn qc_reconstructible(u: Magnitude, d: Magnitude) -> TestResult {
        if d.is_zero() {
            return TestResult::discard();
        }

        let (q, r) = div_mod(&u, &d, DivisionMode::AutoNewton);
        TestResult::from_bool(q.mul(&d).add(&r) == u && r < d)
    }
}
