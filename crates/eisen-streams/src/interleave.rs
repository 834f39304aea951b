//! Interleaving two sampled sequences into one and taking them apart again.
//!
//! Sequences `A` and `B` advance by `delta_a` and `delta_b` per sample. The
//! merged sequence advances by `delta_c = delta_a·delta_b / (delta_a + delta_b)`
//! and takes its next element from `A` exactly when the clock with step
//! `delta_b / (delta_a + delta_b)` crosses a tick, otherwise from `B`.
//!
//! A positive dot product between the two deltas keeps that step strictly
//! shorter than one, so each crossing advances `A` by one element and every
//! other sample advances `B` by one element. The de-interleaving functions
//! rebuild the missing delta from `delta_c`, replay the same clock, and keep
//! the samples of one side.

use eisen_rings::{dot_product, EisensteinFraction, Ring};
use tracing::debug;

use crate::config::StreamConfig;
use crate::error::{Result, StreamError};
use crate::tick::TickClock;

/// Clones `seq[index]`, or reports which input ran out.
pub(crate) fn sample<T: Clone>(seq: &[T], sequence: &'static str, index: usize) -> Result<T> {
    seq.get(index).cloned().ok_or(StreamError::SequenceExhausted {
        sequence,
        index,
        len: seq.len(),
    })
}

fn require_positive_dot(delta_a: &EisensteinFraction, delta_b: &EisensteinFraction) -> Result<()> {
    let dot = dot_product(delta_a, delta_b);
    if dot.is_positive() {
        Ok(())
    } else {
        Err(StreamError::PreconditionViolated(format!(
            "dot product of {delta_a} and {delta_b} is {dot}, must be positive"
        )))
    }
}

/// The clock deciding which side each merged sample comes from.
fn merge_clock(delta_a: &EisensteinFraction, delta_b: &EisensteinFraction) -> Result<TickClock> {
    Ok(TickClock::ratio(delta_b, &(delta_a + delta_b))?)
}

/// Merges `a` and `b` into `config.probe_len` samples on the combined clock.
///
/// Returns the merged samples and the merged delta
/// `delta_a·delta_b / (delta_a + delta_b)`.
///
/// # Errors
///
/// - `PreconditionViolated` if `dot(delta_a, delta_b) ≤ 0`
/// - `SequenceExhausted` if `a` or `b` is too short for the probe length
/// - `Config` for an invalid configuration
pub fn interleave<T: Clone>(
    a: &[T],
    delta_a: &EisensteinFraction,
    b: &[T],
    delta_b: &EisensteinFraction,
    config: &StreamConfig,
) -> Result<(Vec<T>, EisensteinFraction)> {
    config.validate()?;
    require_positive_dot(delta_a, delta_b)?;

    let sum = delta_a + delta_b;
    let delta_c = (delta_a * delta_b).checked_div(&sum)?;
    let clock = merge_clock(delta_a, delta_b)?;
    debug!(%delta_a, %delta_b, %delta_c, probe_len = config.probe_len, "interleave");

    let mut merged = Vec::with_capacity(config.probe_len.min(a.len().saturating_add(b.len())));
    for i in 0..config.probe_len {
        let tick = clock.floor_at(i);
        let next = if clock.crosses(i) {
            sample(a, "A", tick)?
        } else {
            sample(b, "B", i - tick)?
        };
        merged.push(next);
    }

    Ok((merged, delta_c))
}

/// Recovers the delta of the other side from the merged delta:
/// `known·delta_c / (known − delta_c)`.
fn reconstruct_delta(
    known: &EisensteinFraction,
    delta_c: &EisensteinFraction,
) -> Result<EisensteinFraction> {
    let gap = known - delta_c;
    if gap.is_zero() {
        return Err(StreamError::PreconditionViolated(format!(
            "merged delta {delta_c} equals the constituent delta"
        )));
    }
    let other = (known * delta_c).checked_div(&gap)?;
    if other.norm() <= delta_c.norm() {
        return Err(StreamError::PreconditionViolated(format!(
            "reconstructed delta {other} is not slower than the merged delta {delta_c}"
        )));
    }
    Ok(other)
}

/// Walks the merged clock over `c`, keeping the samples that came from `A`
/// (`keep_crossings`) or from `B`.
fn select<T: Clone>(c: &[T], clock: &TickClock, keep_crossings: bool, config: &StreamConfig) -> Vec<T> {
    let limit = config.probe_len.min(c.len());
    c[..limit]
        .iter()
        .enumerate()
        .filter(|&(i, _)| clock.crosses(i) == keep_crossings)
        .map(|(_, x)| x.clone())
        .collect()
}

/// The `A` part of a merged sequence.
///
/// `delta_c` is the merged delta returned by [`interleave`] and `delta_a` the
/// delta of the part being recovered. Returns that part's prefix and the
/// reconstructed `delta_b`.
///
/// # Errors
///
/// - `PreconditionViolated` if the reconstructed delta is not strictly
///   slower than `delta_c`, or its dot product with `delta_a` is not positive
/// - `Config` for an invalid configuration
pub fn deinterleave_even<T: Clone>(
    c: &[T],
    delta_c: &EisensteinFraction,
    delta_a: &EisensteinFraction,
    config: &StreamConfig,
) -> Result<(Vec<T>, EisensteinFraction)> {
    config.validate()?;
    let delta_b = reconstruct_delta(delta_a, delta_c)?;
    require_positive_dot(delta_a, &delta_b)?;
    debug!(%delta_c, %delta_a, %delta_b, "deinterleave even");

    let clock = merge_clock(delta_a, &delta_b)?;
    Ok((select(c, &clock, true, config), delta_b))
}

/// The `B` part of a merged sequence.
///
/// The mirror of [`deinterleave_even`]: given `delta_b`, returns the `B`
/// prefix and the reconstructed `delta_a`.
///
/// # Errors
///
/// As for [`deinterleave_even`].
pub fn deinterleave_odd<T: Clone>(
    c: &[T],
    delta_c: &EisensteinFraction,
    delta_b: &EisensteinFraction,
    config: &StreamConfig,
) -> Result<(Vec<T>, EisensteinFraction)> {
    config.validate()?;
    let delta_a = reconstruct_delta(delta_b, delta_c)?;
    require_positive_dot(&delta_a, delta_b)?;
    debug!(%delta_c, %delta_b, %delta_a, "deinterleave odd");

    let clock = merge_clock(&delta_a, delta_b)?;
    Ok((select(c, &clock, false, config), delta_a))
}
