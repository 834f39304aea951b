//! Pairing two sampled sequences on the faster clock, and the reverse.
//!
//! `combine` walks the faster of the two clocks and repeats elements of the
//! slower sequence until its own clock catches up. `split` drops the
//! repeated samples again.

use eisen_rings::EisensteinFraction;
use tracing::debug;

use crate::config::StreamConfig;
use crate::error::Result;
use crate::interleave::sample;
use crate::tick::TickClock;

/// The delta of the faster clock; on equal magnitude, `delta_b`.
fn faster<'a>(delta_a: &'a EisensteinFraction, delta_b: &'a EisensteinFraction) -> &'a EisensteinFraction {
    if delta_a.norm() < delta_b.norm() {
        delta_a
    } else {
        delta_b
    }
}

/// Pairs `a` and `b` sample by sample on the faster clock.
///
/// If `a` is the faster sequence the pairs are
/// `(a[i], b[floor(i·|delta_a/delta_b|)])`, otherwise
/// `(a[floor(i·|delta_b/delta_a|)], b[i])`. Returns the pairs and the delta
/// of the faster clock.
///
/// # Errors
///
/// - `Arithmetic` if both deltas are zero
/// - `SequenceExhausted` if `a` or `b` is too short for the probe length
/// - `Config` for an invalid configuration
pub fn combine<T: Clone, U: Clone>(
    a: &[T],
    delta_a: &EisensteinFraction,
    b: &[U],
    delta_b: &EisensteinFraction,
    config: &StreamConfig,
) -> Result<(Vec<(T, U)>, EisensteinFraction)> {
    config.validate()?;
    let delta_c = faster(delta_a, delta_b).clone();
    let a_is_fast = delta_c == *delta_a;
    debug!(%delta_a, %delta_b, %delta_c, a_is_fast, "combine");

    let mut pairs = Vec::with_capacity(config.probe_len.min(a.len().max(b.len())));
    if a_is_fast {
        let slow = TickClock::ratio(delta_a, delta_b)?;
        for i in 0..config.probe_len {
            pairs.push((sample(a, "A", i)?, sample(b, "B", slow.floor_at(i))?));
        }
    } else {
        let slow = TickClock::ratio(delta_b, delta_a)?;
        for i in 0..config.probe_len {
            pairs.push((sample(a, "A", slow.floor_at(i))?, sample(b, "B", i)?));
        }
    }

    Ok((pairs, delta_c))
}

/// Resamples a combined sequence back onto the clock of `delta_a`.
///
/// When `delta_a` is slower than `delta_b`, output sample `i` is
/// `c[ceil(i·|delta_a/delta_b|)]`; otherwise every sample is kept. Stops
/// early, returning what it has, once an index passes the end of `c`.
/// Returns the samples and the delta of the faster clock.
///
/// # Errors
///
/// - `Arithmetic` if `delta_b` is zero while `delta_a` is not
/// - `Config` for an invalid configuration
pub fn split<T: Clone>(
    c: &[T],
    delta_a: &EisensteinFraction,
    delta_b: &EisensteinFraction,
    config: &StreamConfig,
) -> Result<(Vec<T>, EisensteinFraction)> {
    config.validate()?;
    let delta_c = faster(delta_a, delta_b).clone();
    let clock = if delta_a.norm() > delta_b.norm() {
        Some(TickClock::ratio(delta_a, delta_b)?)
    } else {
        None
    };
    debug!(%delta_a, %delta_b, %delta_c, resampled = clock.is_some(), "split");

    let mut result = Vec::with_capacity(config.probe_len.min(c.len()));
    for i in 0..config.probe_len {
        let index = clock.as_ref().map_or(i, |clock| clock.ceil_at(i));
        let Some(x) = c.get(index) else {
            break;
        };
        result.push(x.clone());
    }

    Ok((result, delta_c))
}
