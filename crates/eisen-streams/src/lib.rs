//! # eisen-streams
//!
//! Sequences sampled on clocks whose steps are Eisenstein fractions.
//!
//! Two sequences `A` and `B` advance by `delta_a` and `delta_b` per sample.
//! This crate merges and separates them without losing track of which
//! sample came from where:
//!
//! - `interleave` / `deinterleave_even` / `deinterleave_odd`: merge onto the
//!   clock `delta_a·delta_b / (delta_a + delta_b)` and take it apart again
//! - `combine` / `split`: pair samples on the faster clock, repeating the
//!   slower side, and drop the repeats again
//! - `audit_grid`: every round trip over a grid of deltas, in parallel
//!
//! Every tick decision is exact; see [`tick`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod audit;
pub mod combine;
pub mod config;
pub mod error;
pub mod interleave;
pub mod tick;

pub use audit::{audit_grid, AuditCheck, AuditFailure, AuditReport};
pub use combine::{combine, split};
pub use config::{StreamConfig, DEFAULT_PROBE_LEN};
pub use error::{Result, StreamError};
pub use interleave::{deinterleave_even, deinterleave_odd, interleave};
pub use tick::TickClock;

#[cfg(test)]
mod proptests;
