//! Property-based tests for Eisenstein ring and field arithmetic.

#[cfg(test)]
mod tests {
    use eisen_integers::{Integer, Rational};
    use proptest::prelude::*;

    use crate::{gcd, Eisenstein, EisensteinFraction, Ring};

    fn coefficient() -> impl Strategy<Value = i64> {
        -500i64..500i64
    }

    fn eisenstein() -> impl Strategy<Value = Eisenstein> {
        (coefficient(), coefficient()).prop_map(|(a, b)| Eisenstein::new(a, b))
    }

    fn non_zero_eisenstein() -> impl Strategy<Value = Eisenstein> {
        eisenstein().prop_filter("non-zero", |x| !x.is_zero())
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (-60i64..60i64, 1i64..30i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn fraction() -> impl Strategy<Value = EisensteinFraction> {
        (rational(), rational()).prop_map(|(r, i)| EisensteinFraction::new(r, i))
    }

    proptest! {
        #[test]
        fn ring_axioms(x in eisenstein(), y in eisenstein(), z in eisenstein()) {
            prop_assert_eq!(&x + &y, &y + &x);
            prop_assert_eq!(&x * &y, &y * &x);
            prop_assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
            prop_assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
            prop_assert_eq!(&x - &x, Eisenstein::zero());
        }

        #[test]
        fn norm_is_multiplicative(x in eisenstein(), y in eisenstein()) {
            prop_assert_eq!((&x * &y).norm(), &x.norm() * &y.norm());
            prop_assert!(!x.norm().is_negative());
        }

        #[test]
        fn conjugate_product_is_norm(x in eisenstein()) {
            prop_assert_eq!(&x * &x.conjugate(), Eisenstein::from_integer(x.norm()));
        }

        #[test]
        fn euclidean_remainder_is_small(x in eisenstein(), y in non_zero_eisenstein()) {
            let (q, r) = x.div_mod(&y).unwrap();
            prop_assert_eq!(&(&q * &y) + &r, x);
            // nearest-point rounding leaves at most 3/4 of the divisor's norm
            prop_assert!(&r.norm() * &Integer::new(4) <= &y.norm() * &Integer::new(3));
        }

        #[test]
        fn floor_div_undoes_multiplication(x in eisenstein(), y in non_zero_eisenstein()) {
            let product = &x * &y;
            prop_assert_eq!(product.floor_div(&y).unwrap(), x);
            prop_assert!(product.modulo(&y).unwrap().is_zero());
        }

        #[test]
        fn gcd_divides_both(x in eisenstein(), y in eisenstein()) {
            let g = gcd(&x, &y);
            prop_assert!(g.divides(&x));
            prop_assert!(g.divides(&y));
            prop_assert_eq!(g.is_zero(), x.is_zero() && y.is_zero());
        }

        #[test]
        fn gcd_absorbs_common_factor(
            x in eisenstein(),
            y in eisenstein(),
            c in non_zero_eisenstein(),
        ) {
            let g = gcd(&(&x * &c), &(&y * &c));
            prop_assert!(c.divides(&g));
        }

        #[test]
        fn normalized_is_an_associate(x in non_zero_eisenstein()) {
            let n = x.normalized();
            prop_assert_eq!(n.norm(), x.norm());
            prop_assert!(n.divides(&x) && x.divides(&n));
            prop_assert_eq!(n.normalized(), n.clone());
            prop_assert!(!n.imag().is_negative() && n.real() > n.imag());
        }

        #[test]
        fn fraction_inverse(x in fraction()) {
            prop_assume!(!x.is_zero());
            let inverse = x.inverse().unwrap();
            prop_assert_eq!(&x * &inverse, EisensteinFraction::one());
            prop_assert_eq!(inverse.inverse().unwrap(), x);
        }

        #[test]
        fn fraction_field_laws(x in fraction(), y in fraction(), z in fraction()) {
            prop_assert_eq!(&x + &y, &y + &x);
            prop_assert_eq!(&x * &y, &y * &x);
            prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
            prop_assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
            prop_assert_eq!(&x * &(&y + &z), &(&x * &y) + &(&x * &z));
        }

        #[test]
        fn fraction_norm_is_multiplicative(x in fraction(), y in fraction()) {
            prop_assert_eq!((&x * &y).norm(), &x.norm() * &y.norm());
        }

        #[test]
        fn exact_abs_brackets_float_abs(x in fraction()) {
            let floor = x.floor_abs().to_f64();
            let ceil = x.ceil_abs().to_f64();
            let abs = x.abs();
            prop_assert!(floor <= abs + 1e-9 && abs <= ceil + 1e-9);
            prop_assert!(ceil - floor <= 1.0);
        }

        #[test]
        fn embedding_round_trip(x in eisenstein()) {
            let (px, py) = x.complex_embedding();
            prop_assert_eq!(Eisenstein::from_complex_embedding(px, py).unwrap(), x);
        }

        #[test]
        fn quotient_of_integers_lifts(x in eisenstein(), y in non_zero_eisenstein()) {
            let q = EisensteinFraction::from_ratio(&x, &y).unwrap();
            prop_assert_eq!(&q * &EisensteinFraction::from(&y), EisensteinFraction::from(&x));
        }
    }
}
