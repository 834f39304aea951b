//! Exact sampling clocks.
//!
//! A clock with step `s` ticks at `floor(i·|s|)` for sample `i`. Since
//! `|i·s|² = i²·norm(s)` and `⌊√⌊t⌋⌋ = ⌊√t⌋` for `t ≥ 0`, every tick is an
//! integer square root of an exact rational, with no floating point in the
//! decision. A float `abs` can land on either side of an exact tie and
//! shift the whole interleave pattern by one sample.

use eisen_integers::{Integer, Rational};
use eisen_rings::EisensteinFraction;
use num_traits::One;

/// `floor(i·|step|)` and `ceil(i·|step|)` for a fixed step.
#[derive(Clone, Debug)]
pub struct TickClock {
    step_norm: Rational,
}

impl TickClock {
    /// A clock advancing by `|step|` per sample.
    #[must_use]
    pub fn new(step: &EisensteinFraction) -> Self {
        Self {
            step_norm: step.norm(),
        }
    }

    /// A clock advancing by `|numerator / denominator|` per sample.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn ratio(
        numerator: &EisensteinFraction,
        denominator: &EisensteinFraction,
    ) -> eisen_rings::Result<Self> {
        Ok(Self::new(&numerator.checked_div(denominator)?))
    }

    /// `norm(step) = |step|²`.
    #[must_use]
    pub fn step_norm(&self) -> &Rational {
        &self.step_norm
    }

    fn squared_at(&self, i: usize) -> Rational {
        let i = Integer::from(i);
        &Rational::from_integer(&i * &i) * &self.step_norm
    }

    /// `floor(i·|step|)`.
    #[must_use]
    pub fn floor_at(&self, i: usize) -> usize {
        let root = self
            .squared_at(i)
            .floor()
            .isqrt()
            .and_then(|r| r.to_usize());
        root.unwrap_or(usize::MAX)
    }

    /// `ceil(i·|step|)`.
    #[must_use]
    pub fn ceil_at(&self, i: usize) -> usize {
        let squared = self.squared_at(i);
        let Some(root) = squared.floor().isqrt() else {
            return 0;
        };
        let exact = Rational::from_integer(&root * &root) == squared;
        let root = if exact { root } else { root + Integer::one() };
        root.to_usize().unwrap_or(usize::MAX)
    }

    /// Returns true if a tick boundary falls between samples `i` and `i + 1`.
    #[must_use]
    pub fn crosses(&self, i: usize) -> bool {
        self.floor_at(i) != self.floor_at(i + 1)
    }
}
