//! The field of fractions Q(ω) of the Eisenstein integers.
//!
//! An element is stored as two reduced rationals, `real + imag·ω`, rather
//! than as a numerator/denominator pair of Eisenstein integers. With that
//! representation equality is structural and every field operation is a
//! closed formula over `Rational`.
//!
//! `floor`, `ceil` and `round` act on the two coefficients independently.
//! A non-real quantity has no canonical floor; the componentwise rule is a
//! policy that keeps the result on the lattice and agrees with the usual
//! floor on the real axis.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use eisen_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::eisenstein::{Eisenstein, SQRT_3};
use crate::error::{ArithmeticError, Result};
use crate::gcd::{gcd, DotProduct};
use crate::traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};

/// An element `real + imag·ω` of Q(ω) with exact rational coefficients.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct EisensteinFraction {
    real: Rational,
    imag: Rational,
}

impl EisensteinFraction {
    /// Creates `real + imag·ω` from anything convertible to `Rational`.
    #[must_use]
    pub fn new(real: impl Into<Rational>, imag: impl Into<Rational>) -> Self {
        Self {
            real: real.into(),
            imag: imag.into(),
        }
    }

    /// Creates `real_num/real_den + (imag_num/imag_den)·ω`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either denominator is zero.
    pub fn from_parts(
        real_num: impl Into<Integer>,
        real_den: impl Into<Integer>,
        imag_num: impl Into<Integer>,
        imag_den: impl Into<Integer>,
    ) -> Result<Self> {
        let coefficient = |num: Integer, den: Integer| {
            Rational::checked_new(num, den).ok_or_else(|| {
                ArithmeticError::InvalidArgument("fraction denominator is zero".into())
            })
        };
        Ok(Self {
            real: coefficient(real_num.into(), real_den.into())?,
            imag: coefficient(imag_num.into(), imag_den.into())?,
        })
    }

    /// The fraction `numerator / denominator` of two Eisenstein integers.
    ///
    /// Both are first divided by their GCD, then the quotient is expanded
    /// as `numerator·conj(denominator) / norm(denominator)`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn from_ratio(numerator: &Eisenstein, denominator: &Eisenstein) -> Result<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let common = gcd(numerator, denominator);
        let (numerator, denominator) = if common.is_zero() {
            (numerator.clone(), denominator.clone())
        } else {
            (numerator.floor_div(&common)?, denominator.floor_div(&common)?)
        };

        let norm = denominator.norm();
        let scaled = &numerator * &denominator.conjugate();
        Ok(Self {
            real: Rational::new(scaled.real().clone(), norm.clone()),
            imag: Rational::new(scaled.imag().clone(), norm),
        })
    }

    /// Coefficient of 1.
    #[must_use]
    pub fn real(&self) -> &Rational {
        &self.real
    }

    /// Coefficient of ω.
    #[must_use]
    pub fn imag(&self) -> &Rational {
        &self.imag
    }

    /// `(real_num, real_den, imag_num, imag_den)` in lowest terms.
    #[must_use]
    pub fn to_parts(&self) -> (Integer, Integer, Integer, Integer) {
        (
            self.real.numerator(),
            self.real.denominator(),
            self.imag.numerator(),
            self.imag.denominator(),
        )
    }

    /// Returns true if both coefficients are integers.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.real.is_integer() && self.imag.is_integer()
    }

    /// The norm `r² - r·i + i²`, exactly.
    #[must_use]
    pub fn norm(&self) -> Rational {
        let (r, i) = (&self.real, &self.imag);
        &(&(r * r) - &(r * i)) + &(i * i)
    }

    /// Modulus `√norm` as a float.
    ///
    /// Exact only when the norm is a perfect square, as it is for
    /// `1 + ω` or `2 + 2ω`; use [`EisensteinFraction::floor_abs`] or compare
    /// norms when exactness matters.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.norm().to_f64().sqrt()
    }

    /// `⌊|self|⌋`, exactly: `⌊√⌊norm⌋⌋ = ⌊√norm⌋` for a non-negative norm.
    #[must_use]
    pub fn floor_abs(&self) -> Integer {
        self.norm().floor().isqrt().unwrap_or_else(Integer::zero)
    }

    /// `⌈|self|⌉`, exactly.
    #[must_use]
    pub fn ceil_abs(&self) -> Integer {
        let norm = self.norm();
        let root = self.floor_abs();
        if Rational::from_integer(&root * &root) == norm {
            root
        } else {
            root + Integer::one()
        }
    }

    /// The multiplicative inverse.
    ///
    /// `1/(a + bω) = ((a - b) - bω) / norm`, from the ring conjugate.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for zero.
    pub fn inverse(&self) -> Result<Self> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            real: &(&self.real - &self.imag) / &norm,
            imag: &(-&self.imag) / &norm,
        })
    }

    /// `self / divisor`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        Ok(self * &divisor.inverse()?)
    }

    /// Componentwise floor.
    #[must_use]
    pub fn floor(&self) -> Eisenstein {
        Eisenstein::new(self.real.floor(), self.imag.floor())
    }

    /// Componentwise ceiling.
    #[must_use]
    pub fn ceil(&self) -> Eisenstein {
        Eisenstein::new(self.real.ceil(), self.imag.ceil())
    }

    /// Componentwise rounding, ties to even.
    #[must_use]
    pub fn round(&self) -> Eisenstein {
        Eisenstein::new(self.real.round(), self.imag.round())
    }

    /// Approximate point of the complex plane, for display only.
    #[must_use]
    pub fn complex_embedding(&self) -> (f64, f64) {
        let r = self.real.to_f64();
        let i = self.imag.to_f64();
        (r - i / 2.0, i * SQRT_3 / 2.0)
    }
}

impl DotProduct for EisensteinFraction {
    fn dot(&self, other: &Self) -> Rational {
        let (a, b) = (&self.real, &self.imag);
        let (c, d) = (&other.real, &other.imag);
        let cross = &(b * c) + &(a * d);
        &(&(a * c) + &(b * d)) - &(&cross / &Rational::from(2))
    }
}

impl fmt::Display for EisensteinFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rn, rd, im, id) = self.to_parts();
        write!(f, "EisensteinFraction(four=({rn}, {rd}, {im}, {id}))")
    }
}

fn product(x: &EisensteinFraction, y: &EisensteinFraction) -> EisensteinFraction {
    let (a, b) = (&x.real, &x.imag);
    let (c, d) = (&y.real, &y.imag);
    let bd = b * d;
    EisensteinFraction {
        real: &(a * c) - &bd,
        imag: &(&(b * c) + &(a * d)) - &bd,
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, |$x:ident, $y:ident| $body:expr) => {
        impl $trait for &EisensteinFraction {
            type Output = EisensteinFraction;

            fn $method(self, rhs: Self) -> EisensteinFraction {
                let ($x, $y) = (self, rhs);
                $body
            }
        }

        impl $trait for EisensteinFraction {
            type Output = EisensteinFraction;

            fn $method(self, rhs: EisensteinFraction) -> EisensteinFraction {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&EisensteinFraction> for EisensteinFraction {
            type Output = EisensteinFraction;

            fn $method(self, rhs: &EisensteinFraction) -> EisensteinFraction {
                $trait::$method(&self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, |x, y| EisensteinFraction {
    real: &x.real + &y.real,
    imag: &x.imag + &y.imag,
});
forward_binop!(Sub, sub, |x, y| EisensteinFraction {
    real: &x.real - &y.real,
    imag: &x.imag - &y.imag,
});
forward_binop!(Mul, mul, |x, y| product(x, y));

impl Neg for EisensteinFraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl Neg for &EisensteinFraction {
    type Output = EisensteinFraction;

    fn neg(self) -> Self::Output {
        EisensteinFraction {
            real: -&self.real,
            imag: -&self.imag,
        }
    }
}

impl From<&Eisenstein> for EisensteinFraction {
    fn from(x: &Eisenstein) -> Self {
        Self::new(
            Rational::from_integer(x.real().clone()),
            Rational::from_integer(x.imag().clone()),
        )
    }
}

impl From<Eisenstein> for EisensteinFraction {
    fn from(x: Eisenstein) -> Self {
        Self::from(&x)
    }
}

impl From<Rational> for EisensteinFraction {
    fn from(r: Rational) -> Self {
        Self::new(r, Rational::zero())
    }
}

impl From<Integer> for EisensteinFraction {
    fn from(n: Integer) -> Self {
        Self::from(Rational::from_integer(n))
    }
}

impl From<i64> for EisensteinFraction {
    fn from(n: i64) -> Self {
        Self::from(Rational::from(n))
    }
}

impl TryFrom<&EisensteinFraction> for Eisenstein {
    type Error = ArithmeticError;

    fn try_from(x: &EisensteinFraction) -> Result<Self> {
        if x.is_integral() {
            Ok(Eisenstein::new(x.real.numerator(), x.imag.numerator()))
        } else {
            Err(ArithmeticError::InvalidArgument(format!(
                "{x} has a non-integral coefficient"
            )))
        }
    }
}

impl PartialEq<Eisenstein> for EisensteinFraction {
    fn eq(&self, other: &Eisenstein) -> bool {
        *self == EisensteinFraction::from(other)
    }
}

impl PartialEq<EisensteinFraction> for Eisenstein {
    fn eq(&self, other: &EisensteinFraction) -> bool {
        other == self
    }
}

impl Ring for EisensteinFraction {
    fn zero() -> Self {
        Self::default()
    }

    fn one() -> Self {
        Self::from(1i64)
    }

    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }

    fn is_one(&self) -> bool {
        self.real.is_one() && self.imag.is_zero()
    }
}

impl CommutativeRing for EisensteinFraction {}
impl IntegralDomain for EisensteinFraction {}

impl EuclideanDomain for EisensteinFraction {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // Division in a field is exact.
        (self.field_div(other), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.inverse(), other.inverse()) {
            (Ok(inv), _) => (Self::one(), inv, Self::zero()),
            (Err(_), Ok(inv)) => (Self::one(), Self::zero(), inv),
            (Err(_), Err(_)) => (Self::zero(), Self::zero(), Self::zero()),
        }
    }
}

impl Field for EisensteinFraction {
    fn inv(&self) -> Option<Self> {
        self.inverse().ok()
    }
}
