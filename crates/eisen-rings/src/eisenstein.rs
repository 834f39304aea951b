//! The ring of Eisenstein integers Z[ω].
//!
//! Elements are `a + bω` with `ω = (-1 + i√3)/2`, so `ω² = -1 - ω`.
//! The ring is Euclidean with respect to the norm `a² - ab + b²`:
//! rounding the exact quotient coordinate-wise in the `(1, ω)` basis leaves
//! a fractional part of norm at most 3/4, so every remainder is strictly
//! smaller than the divisor.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use eisen_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::error::{ArithmeticError, Result};
use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, Ring};

pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// An Eisenstein integer `real + imag·ω`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Eisenstein {
    real: Integer,
    imag: Integer,
}

impl Eisenstein {
    /// Creates `real + imag·ω`.
    #[must_use]
    pub fn new(real: impl Into<Integer>, imag: impl Into<Integer>) -> Self {
        Self {
            real: real.into(),
            imag: imag.into(),
        }
    }

    /// Embeds a rational integer as `n + 0ω`.
    #[must_use]
    pub fn from_integer(n: impl Into<Integer>) -> Self {
        Self::new(n, Integer::zero())
    }

    /// The generator ω.
    #[must_use]
    pub fn omega() -> Self {
        Self::new(0, 1)
    }

    /// The six units `±1, ±ω, ±ω²`.
    #[must_use]
    pub fn units() -> [Self; 6] {
        [
            Self::new(1, 0),
            Self::new(1, 1),
            Self::new(0, 1),
            Self::new(-1, 0),
            Self::new(-1, -1),
            Self::new(0, -1),
        ]
    }

    /// Coefficient of 1.
    #[must_use]
    pub fn real(&self) -> &Integer {
        &self.real
    }

    /// Coefficient of ω.
    #[must_use]
    pub fn imag(&self) -> &Integer {
        &self.imag
    }

    /// The norm `a² - ab + b²`, the squared modulus of the embedding.
    #[must_use]
    pub fn norm(&self) -> Integer {
        let (a, b) = (&self.real, &self.imag);
        &(&(a * a) - &(a * b)) + &(b * b)
    }

    /// Modulus `√norm`.
    ///
    /// Floating point: compare [`Eisenstein::norm`] values when an exact
    /// answer is needed.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.norm().to_f64().sqrt()
    }

    /// The ring conjugate `(a - b) - bω`, satisfying `x·conj(x) = norm(x)`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            real: &self.real - &self.imag,
            imag: -&self.imag,
        }
    }

    /// Returns true for the six elements of norm one.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    /// The point `(a - b/2, b·√3/2)` of the complex plane.
    ///
    /// Approximate; used for display and diagnostics only.
    #[must_use]
    pub fn complex_embedding(&self) -> (f64, f64) {
        let a = self.real.to_f64();
        let b = self.imag.to_f64();
        (a - b / 2.0, b * SQRT_3 / 2.0)
    }

    /// Nearest lattice point to the plane point `(x, y)`.
    ///
    /// Rounds the ω-basis coordinates `x + y/√3` and `2y/√3`, ties to even.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for non-finite or out-of-range coordinates.
    pub fn from_complex_embedding(x: f64, y: f64) -> Result<Self> {
        let real = round_to_integer(x + y / SQRT_3)?;
        let imag = round_to_integer(2.0 * y / SQRT_3)?;
        Ok(Self { real, imag })
    }

    /// The exact quotient `self / divisor` in ω-basis coordinates.
    ///
    /// `x/y = x·conj(y) / norm(y)`; both Euclidean operations round this one
    /// value so quotient and remainder always agree.
    fn exact_quotient(&self, divisor: &Self) -> Result<(Rational, Rational)> {
        let norm = divisor.norm();
        if norm.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let scaled = self * &divisor.conjugate();
        Ok((
            Rational::new(scaled.real, norm.clone()),
            Rational::new(scaled.imag, norm),
        ))
    }

    /// Euclidean quotient: the lattice point nearest to `self / divisor`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `divisor` is zero.
    pub fn floor_div(&self, divisor: &Self) -> Result<Self> {
        let (real, imag) = self.exact_quotient(divisor)?;
        Ok(Self {
            real: real.round(),
            imag: imag.round(),
        })
    }

    /// Euclidean remainder `self - floor_div(self, divisor)·divisor`.
    ///
    /// `norm(result) < norm(divisor)` for every non-zero divisor.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `divisor` is zero.
    pub fn modulo(&self, divisor: &Self) -> Result<Self> {
        self.div_mod(divisor).map(|(_, r)| r)
    }

    /// Quotient and remainder from a single rounding of the exact quotient.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when `divisor` is zero.
    pub fn div_mod(&self, divisor: &Self) -> Result<(Self, Self)> {
        let quotient = self.floor_div(divisor)?;
        let remainder = self - &(&quotient * divisor);
        Ok((quotient, remainder))
    }

    /// True division is not defined on the ring.
    ///
    /// # Errors
    ///
    /// Always fails with `UnsupportedOperation`; lift both operands to
    /// `EisensteinFraction` for exact division.
    pub fn true_div(&self, _divisor: &Self) -> Result<Self> {
        Err(ArithmeticError::UnsupportedOperation(
            "Eisenstein integers are not closed under division; use EisensteinFraction".into(),
        ))
    }

    /// Returns true if `self` divides `other` with zero remainder.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        other.modulo(self).map_or(false, |r| r.is_zero())
    }

    /// The associate of `self` whose argument lies in `[0°, 60°)`.
    ///
    /// Equivalently `imag ≥ 0` and `real > imag`. Zero is returned unchanged.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        // Multiplying by the unit 1 + ω turns the plane by 60°.
        let mut current = self.clone();
        for _ in 0..6 {
            if !current.imag.is_negative() && current.real > current.imag {
                break;
            }
            current = Self {
                real: &current.real - &current.imag,
                imag: current.real,
            };
        }
        current
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_integer(value: f64) -> Result<Integer> {
    let rounded = value.round_ties_even();
    if !rounded.is_finite() || rounded.abs() >= 9.2e18 {
        return Err(ArithmeticError::InvalidArgument(format!(
            "cannot place {value} on the integer lattice"
        )));
    }
    Ok(Integer::new(rounded as i64))
}

impl fmt::Display for Eisenstein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eisenstein({}, {})", self.real, self.imag)
    }
}

fn product(x: &Eisenstein, y: &Eisenstein) -> Eisenstein {
    // (a + bω)(c + dω) = (ac - bd) + (bc + ad - bd)ω
    let (a, b) = (&x.real, &x.imag);
    let (c, d) = (&y.real, &y.imag);
    let bd = b * d;
    Eisenstein {
        real: &(a * c) - &bd,
        imag: &(&(b * c) + &(a * d)) - &bd,
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, |$x:ident, $y:ident| $body:expr) => {
        impl $trait for &Eisenstein {
            type Output = Eisenstein;

            fn $method(self, rhs: Self) -> Eisenstein {
                let ($x, $y) = (self, rhs);
                $body
            }
        }

        impl $trait for Eisenstein {
            type Output = Eisenstein;

            fn $method(self, rhs: Eisenstein) -> Eisenstein {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&Eisenstein> for Eisenstein {
            type Output = Eisenstein;

            fn $method(self, rhs: &Eisenstein) -> Eisenstein {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<i64> for Eisenstein {
            type Output = Eisenstein;

            fn $method(self, rhs: i64) -> Eisenstein {
                $trait::$method(&self, &Eisenstein::from_integer(rhs))
            }
        }

        impl $trait<Eisenstein> for i64 {
            type Output = Eisenstein;

            fn $method(self, rhs: Eisenstein) -> Eisenstein {
                $trait::$method(&Eisenstein::from_integer(self), &rhs)
            }
        }
    };
}

forward_binop!(Add, add, |x, y| Eisenstein {
    real: &x.real + &y.real,
    imag: &x.imag + &y.imag,
});
forward_binop!(Sub, sub, |x, y| Eisenstein {
    real: &x.real - &y.real,
    imag: &x.imag - &y.imag,
});
forward_binop!(Mul, mul, |x, y| product(x, y));

impl Neg for Eisenstein {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl Neg for &Eisenstein {
    type Output = Eisenstein;

    fn neg(self) -> Self::Output {
        Eisenstein {
            real: -&self.real,
            imag: -&self.imag,
        }
    }
}

impl From<Integer> for Eisenstein {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Eisenstein {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Ring for Eisenstein {
    fn zero() -> Self {
        Self::default()
    }

    fn one() -> Self {
        Self::new(1, 0)
    }

    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }

    fn is_one(&self) -> bool {
        self.real.is_one() && self.imag.is_zero()
    }
}

impl CommutativeRing for Eisenstein {}
impl IntegralDomain for Eisenstein {}

impl EuclideanDomain for Eisenstein {
    /// # Panics
    ///
    /// Panics if `other` is zero; use [`Eisenstein::div_mod`] to get an error.
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        self.div_mod(other).expect("Euclidean division by zero")
    }

    fn gcd(&self, other: &Self) -> Self {
        crate::gcd::gcd(self, other)
    }
}
