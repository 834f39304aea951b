//! # eisen-integers
//!
//! Arbitrary precision integer and rational arithmetic underlying the
//! Eisenstein ring and its field of fractions.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with floor division and
//!   integer square roots
//! - Auto-reducing exact rationals (`Rational`) with `floor`, `ceil` and
//!   round-half-to-even projections onto the integers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
