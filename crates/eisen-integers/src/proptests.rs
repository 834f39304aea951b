//! Property-based tests for the integer projections of rationals.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn div_floor_brackets_quotient(a in small_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let q = a.div_floor(&b);
            let r = &a - &(&q * &b);

            // remainder has the sign of the divisor and is smaller in magnitude
            prop_assert!(r.is_zero() || r.signum() == b.signum());
            prop_assert!(r.abs() < b.abs());
        }

        #[test]
        fn isqrt_is_floor_of_root(n in 0i64..1_000_000i64) {
            let n = Integer::new(n);
            let s = n.isqrt().unwrap();
            let next = &s + &Integer::new(1);
            prop_assert!(&s * &s <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn floor_le_value_le_ceil(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            let floor = Rational::from_integer(r.floor());
            let ceil = Rational::from_integer(r.ceil());

            prop_assert!(floor <= r && r <= ceil);
            prop_assert!(&ceil - &floor <= Rational::from(1));
            prop_assert_eq!(r.is_integer(), floor == ceil);
        }

        #[test]
        fn round_is_within_half(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            let rounded = Rational::from_integer(r.round());
            prop_assert!((&r - &rounded).abs() <= Rational::from_i64(1, 2));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            use num_traits::One;
            let a = Rational::from_i64(num, den);
            prop_assert!((a.clone() * a.recip()).is_one());
        }
    }
}
