//! # eisen-rings
//!
//! The Eisenstein integers Z[ω], ω = e^(2πi/3), and their field of
//! fractions Q(ω).
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`
//! - `Eisenstein`: the ring, with nearest-lattice-point Euclidean division
//! - `EisensteinFraction`: the field, with exact rational coefficients
//! - The ring GCD and the planar dot product
//! - `Number`: a value of any shape, promoted explicitly at each operator
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain   (Eisenstein)
//!                 └── Field        (EisensteinFraction)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eisenstein;
pub mod error;
pub mod fraction;
pub mod gcd;
pub mod number;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use eisenstein::Eisenstein;
pub use error::{ArithmeticError, Result};
pub use fraction::EisensteinFraction;
pub use gcd::{dot_product, gcd, gcd_normalized, DotProduct};
pub use number::{Number, Shape};
pub use traits::{CommutativeRing, EuclideanDomain, Field, IntegralDomain, Ring};
