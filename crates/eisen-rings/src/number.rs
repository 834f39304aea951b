//! A numeric value of any of the four shapes, with explicit promotion.
//!
//! Binary operations never inspect operand types ad hoc: both sides are
//! promoted to the join of their shapes first, then the operation runs in
//! that single structure.
//!
//! ```text
//!            Fraction
//!           /        \
//!     Rational      Eisenstein
//!           \        /
//!              Int
//! ```

use std::fmt;

use eisen_integers::{Integer, Rational};
use num_traits::Zero;

use crate::eisenstein::Eisenstein;
use crate::error::{ArithmeticError, Result};
use crate::fraction::EisensteinFraction;
use crate::traits::Ring;

/// The structure a [`Number`] lives in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Shape {
    /// Z.
    Int,
    /// Q.
    Rational,
    /// Z[ω].
    Eisenstein,
    /// Q(ω).
    Fraction,
}

impl Shape {
    /// The smallest shape both `self` and `other` embed into.
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        match (self, other) {
            (a, b) if a == b => a,
            (Self::Int, s) | (s, Self::Int) => s,
            _ => Self::Fraction,
        }
    }

    /// Returns true if every value of `self` is also a value of `target`.
    #[must_use]
    pub fn embeds_into(self, target: Self) -> bool {
        self.join(target) == target
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "integer",
            Self::Rational => "rational",
            Self::Eisenstein => "Eisenstein integer",
            Self::Fraction => "Eisenstein fraction",
        };
        f.write_str(name)
    }
}

/// A value in Z, Q, Z[ω] or Q(ω).
#[derive(Clone, Debug)]
pub enum Number {
    /// An ordinary integer.
    Int(Integer),
    /// An ordinary rational.
    Rational(Rational),
    /// An Eisenstein integer.
    Eisenstein(Eisenstein),
    /// An Eisenstein fraction.
    Fraction(EisensteinFraction),
}

#[allow(clippy::should_implement_trait)]
impl Number {
    /// The structure this value lives in.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Int(_) => Shape::Int,
            Self::Rational(_) => Shape::Rational,
            Self::Eisenstein(_) => Shape::Eisenstein,
            Self::Fraction(_) => Shape::Fraction,
        }
    }

    /// Lifts `self` into `target`.
    ///
    /// Integers become `(n, 0)`, rationals become `(q, 0)` and Eisenstein
    /// integers keep their coefficients.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `target` cannot hold every value of the
    /// current shape; promotion never narrows.
    pub fn promote_to(&self, target: Shape) -> Result<Self> {
        if !self.shape().embeds_into(target) {
            return Err(ArithmeticError::InvalidArgument(format!(
                "cannot promote {} to {target}",
                self.shape()
            )));
        }
        let promoted = match (self, target) {
            (value, shape) if value.shape() == shape => value.clone(),
            (Self::Int(n), Shape::Rational) => Self::Rational(Rational::from_integer(n.clone())),
            (Self::Int(n), Shape::Eisenstein) => Self::Eisenstein(Eisenstein::from_integer(n.clone())),
            (Self::Int(n), Shape::Fraction) => Self::Fraction(EisensteinFraction::from(n.clone())),
            (Self::Rational(q), Shape::Fraction) => Self::Fraction(EisensteinFraction::from(q.clone())),
            (Self::Eisenstein(x), Shape::Fraction) => Self::Fraction(EisensteinFraction::from(x)),
            _ => unreachable!("embeds_into admits only widening promotions"),
        };
        Ok(promoted)
    }

    fn promote_pair(&self, other: &Self) -> Result<(Self, Self)> {
        let shape = self.shape().join(other.shape());
        Ok((self.promote_to(shape)?, other.promote_to(shape)?))
    }

    /// Returns true if the value is zero in its structure.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => n.is_zero(),
            Self::Rational(q) => q.is_zero(),
            Self::Eisenstein(x) => Ring::is_zero(x),
            Self::Fraction(x) => Ring::is_zero(x),
        }
    }

    /// `self + other` in the joined shape.
    ///
    /// # Errors
    ///
    /// Never fails for well-formed values; the `Result` carries promotion
    /// errors uniformly with the other operators.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Ok(match self.promote_pair(other)? {
            (Self::Int(a), Self::Int(b)) => Self::Int(a + b),
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(a + b),
            (Self::Eisenstein(a), Self::Eisenstein(b)) => Self::Eisenstein(a + b),
            (Self::Fraction(a), Self::Fraction(b)) => Self::Fraction(a + b),
            _ => unreachable!("operands share a shape after promotion"),
        })
    }

    /// `self - other` in the joined shape.
    ///
    /// # Errors
    ///
    /// See [`Number::add`].
    pub fn sub(&self, other: &Self) -> Result<Self> {
        Ok(match self.promote_pair(other)? {
            (Self::Int(a), Self::Int(b)) => Self::Int(a - b),
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(a - b),
            (Self::Eisenstein(a), Self::Eisenstein(b)) => Self::Eisenstein(a - b),
            (Self::Fraction(a), Self::Fraction(b)) => Self::Fraction(a - b),
            _ => unreachable!("operands share a shape after promotion"),
        })
    }

    /// `self · other` in the joined shape.
    ///
    /// # Errors
    ///
    /// See [`Number::add`].
    pub fn mul(&self, other: &Self) -> Result<Self> {
        Ok(match self.promote_pair(other)? {
            (Self::Int(a), Self::Int(b)) => Self::Int(a * b),
            (Self::Rational(a), Self::Rational(b)) => Self::Rational(a * b),
            (Self::Eisenstein(a), Self::Eisenstein(b)) => Self::Eisenstein(a * b),
            (Self::Fraction(a), Self::Fraction(b)) => Self::Fraction(a * b),
            _ => unreachable!("operands share a shape after promotion"),
        })
    }

    /// True division.
    ///
    /// Two integers divide to a rational. Inside Z[ω] true division is
    /// rejected; promote one side to a fraction first.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero divisor, `UnsupportedOperation` when the
    /// joined shape is `Eisenstein`.
    pub fn div(&self, other: &Self) -> Result<Self> {
        match self.promote_pair(other)? {
            (Self::Eisenstein(a), Self::Eisenstein(b)) => a.true_div(&b).map(Self::Eisenstein),
            _ if other.is_zero() => Err(ArithmeticError::DivisionByZero),
            (Self::Int(a), Self::Int(b)) => Ok(Self::Rational(Rational::new(a, b))),
            (Self::Rational(a), Self::Rational(b)) => Ok(Self::Rational(a / b)),
            (Self::Fraction(a), Self::Fraction(b)) => a.checked_div(&b).map(Self::Fraction),
            _ => unreachable!("operands share a shape after promotion"),
        }
    }

    /// Floor division.
    ///
    /// Integers and rationals round toward negative infinity and yield an
    /// `Int`. Eisenstein integers use the nearest-lattice-point quotient.
    /// Fractions take the componentwise floor of the exact quotient.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero divisor.
    pub fn floor_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        match self.promote_pair(other)? {
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(a.div_floor(&b))),
            (Self::Rational(a), Self::Rational(b)) => Ok(Self::Int((a / b).floor())),
            (Self::Eisenstein(a), Self::Eisenstein(b)) => a.floor_div(&b).map(Self::Eisenstein),
            (Self::Fraction(a), Self::Fraction(b)) => {
                a.checked_div(&b).map(|q| Self::Eisenstein(q.floor()))
            }
            _ => unreachable!("operands share a shape after promotion"),
        }
    }

    /// Remainder `self - floor_div(self, other)·other`, in the joined shape.
    ///
    /// For integers the remainder takes the sign of the divisor. For
    /// Eisenstein integers its norm is below the divisor's.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for a zero divisor.
    pub fn rem(&self, other: &Self) -> Result<Self> {
        let quotient = self.floor_div(other)?;
        let product = quotient.mul(other)?;
        let remainder = self.sub(&product)?;
        remainder.promote_to(self.shape().join(other.shape()))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match self.promote_pair(other) {
            Ok((Self::Int(a), Self::Int(b))) => a == b,
            Ok((Self::Rational(a), Self::Rational(b))) => a == b,
            Ok((Self::Eisenstein(a), Self::Eisenstein(b))) => a == b,
            Ok((Self::Fraction(a), Self::Fraction(b))) => a == b,
            _ => false,
        }
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Rational(q) => write!(f, "{q}"),
            Self::Eisenstein(x) => write!(f, "{x}"),
            Self::Fraction(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(Integer::new(n))
    }
}

impl From<Integer> for Number {
    fn from(n: Integer) -> Self {
        Self::Int(n)
    }
}

impl From<Rational> for Number {
    fn from(q: Rational) -> Self {
        Self::Rational(q)
    }
}

impl From<Eisenstein> for Number {
    fn from(x: Eisenstein) -> Self {
        Self::Eisenstein(x)
    }
}

impl From<EisensteinFraction> for Number {
    fn from(x: EisensteinFraction) -> Self {
        Self::Fraction(x)
    }
}
