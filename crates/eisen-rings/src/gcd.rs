//! Euclidean GCD over the Eisenstein integers and the planar dot product.
//!
//! The loop is the integer Euclidean algorithm, stopping once the remainder
//! is zero. A zero remainder is the only pair whose dot product vanishes for
//! every partner; orthogonal pairs such as `1` and `1 + 2ω` also have a
//! vanishing dot product, so the dot product alone cannot end the loop. Every
//! step strictly decreases the remainder's norm, which bounds the iteration
//! count.

use eisen_integers::{Integer, Rational};

use crate::eisenstein::Eisenstein;
use crate::traits::Ring;

/// Inner product of the complex-plane embeddings of two values.
///
/// Used as a positivity gate; never as a distance (compare norms for
/// that).
pub trait DotProduct {
    /// `⟨self, other⟩` in the plane, exactly.
    fn dot(&self, other: &Self) -> Rational;
}

impl DotProduct for Eisenstein {
    fn dot(&self, other: &Self) -> Rational {
        // ac + bd - (bc + ad)/2
        let (a, b) = (self.real(), self.imag());
        let (c, d) = (other.real(), other.imag());
        let two = Integer::new(2);
        let twice = &(&(&(a * c) + &(b * d)) * &two) - &(&(b * c) + &(a * d));
        Rational::new(twice, two)
    }
}

/// `⟨x, y⟩` for Eisenstein integers or fractions.
pub fn dot_product<T: DotProduct>(x: &T, y: &T) -> Rational {
    x.dot(y)
}

/// A greatest common divisor of `x` and `y`.
///
/// The result is whichever associate the remainder sequence ends on; see
/// [`gcd_normalized`] for a canonical choice. `gcd(0, 0) = 0`.
#[must_use]
pub fn gcd(x: &Eisenstein, y: &Eisenstein) -> Eisenstein {
    let (mut x, mut y) = if y.norm() > x.norm() {
        (y.clone(), x.clone())
    } else {
        (x.clone(), y.clone())
    };

    let mut steps = 0usize;
    while !y.is_zero() {
        let Ok(remainder) = x.modulo(&y) else {
            break;
        };
        tracing::trace!(step = steps, %x, %y, %remainder, "eisenstein gcd step");
        x = y;
        y = remainder;
        steps += 1;
    }

    tracing::trace!(steps, gcd = %x, "eisenstein gcd finished");
    x
}

/// [`gcd`] reduced to the associate with argument in `[0°, 60°)`.
#[must_use]
pub fn gcd_normalized(x: &Eisenstein, y: &Eisenstein) -> Eisenstein {
    gcd(x, y).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use crate::traits::EuclideanDomain;

    fn e(a: i64, b: i64) -> Eisenstein {
        Eisenstein::new(a, b)
    }

    #[test]
    fn test_dot_product() {
        // 1 and 1 + 2ω = i√3 are orthogonal
        assert!(dot_product(&e(1, 0), &e(1, 2)).is_zero());
        assert_eq!(dot_product(&e(4, 2), &e(2, 1)), Rational::from(6));
        assert_eq!(dot_product(&e(1, 2), &e(1, 1)), Rational::from_i64(3, 2));
        // ⟨x, x⟩ is the norm
        assert_eq!(dot_product(&e(2, 3), &e(2, 3)), Rational::from(7));
    }

    #[test]
    fn test_gcd_literals() {
        assert_eq!(gcd(&e(2, 0), &e(2, 0)), e(2, 0));
        assert_eq!(gcd(&e(2, 0), &e(4, 0)), e(2, 0));
        assert_eq!(gcd(&e(2, 1), &e(4, 2)), e(2, 1));
    }

    #[test]
    fn test_gcd_of_orthogonal_pair() {
        let g = gcd(&e(1, 0), &e(1, 2));
        assert!(g.is_unit());
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(&e(3, 1), &e(0, 0)), e(3, 1));
        assert_eq!(gcd(&e(0, 0), &e(3, 1)), e(3, 1));
        assert_eq!(gcd(&e(0, 0), &e(0, 0)), e(0, 0));
    }

    #[test]
    fn test_gcd_of_products() {
        let common = e(3, 1);
        let x = &common * &e(2, 5);
        let y = &common * &e(-4, 1);
        let g = gcd(&x, &y);
        assert!(g.divides(&x));
        assert!(g.divides(&y));
        assert!(common.divides(&g));
        assert_eq!(gcd_normalized(&x, &y), gcd_normalized(&y, &x));
    }

    #[test]
    fn test_extended_gcd_identity() {
        let x = e(7, 3);
        let y = e(-2, 9);
        let (g, s, t) = x.extended_gcd(&y);
        assert_eq!(&(&x * &s) + &(&y * &t), g);
        assert!(g.divides(&x) && g.divides(&y));
    }

    #[test]
    fn test_lcm_is_a_common_multiple() {
        let x = &e(3, 1) * &e(2, 5);
        let y = &e(3, 1) * &e(-4, 1);
        let l = x.lcm(&y);
        assert!(x.divides(&l) && y.divides(&l));
        assert_eq!(l.norm(), x.norm() * y.norm() / gcd(&x, &y).norm());
        assert!(x.lcm(&e(0, 0)).is_zero());
    }
}
