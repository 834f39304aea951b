//! # Eisen
//!
//! Exact arithmetic over the Eisenstein integers Z[ω] and their field of
//! fractions, and an algebra of sequences sampled on Eisenstein-fraction
//! clocks.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: arbitrary precision integer and rational
//!   coefficients, no floating point in any decision
//! - **Euclidean Ring**: nearest-lattice-point division and the ring GCD
//! - **Field of Fractions**: inverse, componentwise floor/ceil/round
//! - **Stream Algebra**: interleave, combine, split and the inverse
//!   de-interleaves, with a parallel round-trip audit
//!
//! ## Quick Start
//!
//! ```rust
//! use eisen::prelude::*;
//!
//! let x = Eisenstein::new(4, 2);
//! let y = Eisenstein::new(2, 1);
//! assert_eq!(gcd(&x, &y), y);
//!
//! let a: Vec<i64> = (1..50).collect();
//! let b: Vec<i64> = (100..150).collect();
//! let delta_a = EisensteinFraction::new(1, 2);
//! let delta_b = EisensteinFraction::new(1, 1);
//! let config = StreamConfig::default();
//!
//! let (merged, delta_c) = interleave(&a, &delta_a, &b, &delta_b, &config).unwrap();
//! let (evens, _) = deinterleave_even(&merged, &delta_c, &delta_a, &config).unwrap();
//! assert_eq!(evens, a[..evens.len()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use eisen_integers as integers;
pub use eisen_rings as rings;
pub use eisen_streams as streams;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use eisen_integers::{Integer, Rational};
    pub use eisen_rings::{
        dot_product, gcd, gcd_normalized, ArithmeticError, Eisenstein, EisensteinFraction,
        EuclideanDomain, Field, Number, Ring, Shape,
    };
    pub use eisen_streams::{
        combine, deinterleave_even, deinterleave_odd, interleave, split, StreamConfig, StreamError,
    };
}
