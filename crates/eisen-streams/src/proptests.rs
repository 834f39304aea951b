//! Property-based tests for the stream operations.

#[cfg(test)]
mod tests {
    use eisen_integers::Rational;
    use eisen_rings::{dot_product, EisensteinFraction};
    use proptest::prelude::*;

    use crate::{combine, deinterleave_even, deinterleave_odd, interleave, split, StreamConfig, TickClock};

    fn delta() -> impl Strategy<Value = EisensteinFraction> {
        (1i64..20, 1i64..8, -10i64..10, 1i64..8).prop_map(|(rn, rd, im, id)| {
            EisensteinFraction::new(Rational::from_i64(rn, rd), Rational::from_i64(im, id))
        })
    }

    fn numbers() -> Vec<u32> {
        (0..64).collect()
    }

    proptest! {
        #[test]
        fn exact_ticks_match_float_off_ties(re in -12i64..12, im in -12i64..12, den in 1i64..12, i in 0usize..200) {
            let step = EisensteinFraction::new(Rational::from_i64(re, den), Rational::from_i64(im, den));
            let clock = TickClock::new(&step);
            #[allow(clippy::cast_precision_loss)]
            let scaled = i as f64 * step.abs();
            prop_assume!((scaled - scaled.round()).abs() > 1e-6);

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let expected = scaled.floor() as usize;
            prop_assert_eq!(clock.floor_at(i), expected);
            prop_assert_eq!(clock.ceil_at(i), expected + 1);
        }

        #[test]
        fn interleave_round_trip(delta_a in delta(), delta_b in delta()) {
            prop_assume!(dot_product(&delta_a, &delta_b).is_positive());
            let config = StreamConfig::default();
            let a = numbers();
            let b: Vec<u32> = (1000..1064).collect();

            let (merged, delta_c) = interleave(&a, &delta_a, &b, &delta_b, &config).unwrap();
            prop_assert!(delta_c.norm() < delta_a.norm());
            prop_assert!(delta_c.norm() < delta_b.norm());

            let (odd, recovered_a) = deinterleave_odd(&merged, &delta_c, &delta_b, &config).unwrap();
            prop_assert_eq!(recovered_a, delta_a.clone());
            prop_assert_eq!(&odd[..], &b[..odd.len()]);

            let (even, recovered_b) = deinterleave_even(&merged, &delta_c, &delta_a, &config).unwrap();
            prop_assert_eq!(recovered_b, delta_b);
            prop_assert_eq!(&even[..], &a[..even.len()]);
            prop_assert_eq!(odd.len() + even.len(), merged.len());
        }

        #[test]
        fn split_undoes_combine(delta_a in delta(), delta_b in delta()) {
            let config = StreamConfig::default();
            let a = numbers();
            let b: Vec<u32> = (1000..1064).collect();

            let (pairs, delta_c) = combine(&a, &delta_a, &b, &delta_b, &config).unwrap();
            prop_assert!(delta_c == delta_a || delta_c == delta_b);
            prop_assert!(delta_c.norm() <= delta_a.norm() && delta_c.norm() <= delta_b.norm());

            let (left, _) = split(&pairs, &delta_a, &delta_b, &config).unwrap();
            let left: Vec<u32> = left.into_iter().map(|(x, _)| x).collect();
            prop_assert!(!left.is_empty());
            prop_assert_eq!(&left[..], &a[..left.len()]);

            let (right, _) = split(&pairs, &delta_b, &delta_a, &config).unwrap();
            let right: Vec<u32> = right.into_iter().map(|(_, y)| y).collect();
            prop_assert_eq!(&right[..], &b[..right.len()]);
        }

        #[test]
        fn probe_len_bounds_output(delta_a in delta(), delta_b in delta(), probe_len in 1usize..60) {
            let config = StreamConfig::with_probe_len(probe_len).unwrap();
            let a = numbers();
            let b: Vec<u32> = (1000..1064).collect();

            let (pairs, _) = combine(&a, &delta_a, &b, &delta_b, &config).unwrap();
            prop_assert_eq!(pairs.len(), probe_len);
            if dot_product(&delta_a, &delta_b).is_positive() {
                let (merged, _) = interleave(&a, &delta_a, &b, &delta_b, &config).unwrap();
                prop_assert_eq!(merged.len(), probe_len);
            }
        }
    }
}
