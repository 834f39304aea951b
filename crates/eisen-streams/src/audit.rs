//! Exhaustive round-trip audit over a grid of deltas.
//!
//! For every `delta_a = (i + 1) + l·ω` and `delta_b = (j + 1) + k·ω` with
//! `i, j, k, l` in `0..range`, the audit runs the stream operations on two
//! tagged index sequences and checks that every output can be traced back
//! to the right positions of the inputs:
//!
//! - `interleave` emits each side in order, and both de-interleaves return
//!   the input side and reconstruct the missing delta exactly
//! - `combine` never skips a sample of either side
//! - `split` of the combined sequence returns each side in order
//!
//! Pairs with a non-positive dot product are skipped for the interleave
//! family. Each grid point is independent, so the grid is evaluated in
//! parallel.

use rayon::prelude::*;

use eisen_rings::{dot_product, EisensteinFraction};

use crate::combine::{combine, split};
use crate::config::StreamConfig;
use crate::error::{Result, StreamError};
use crate::interleave::{deinterleave_even, deinterleave_odd, interleave};

/// A sample of one of the two audited sequences, tagged with its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tagged {
    A(usize),
    B(usize),
}

/// Which round trip failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditCheck {
    /// `interleave` followed by `deinterleave_even` / `deinterleave_odd`.
    Interleave,
    /// `combine` followed by `split`.
    Combine,
}

/// One failing grid point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditFailure {
    /// Delta of the first sequence.
    pub delta_a: EisensteinFraction,
    /// Delta of the second sequence.
    pub delta_b: EisensteinFraction,
    /// The round trip that failed.
    pub check: AuditCheck,
    /// What went wrong.
    pub reason: String,
}

/// Outcome of [`audit_grid`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Grid points whose interleave round trip was checked.
    pub interleave_checked: usize,
    /// Grid points skipped by the interleave round trip for a
    /// non-positive dot product.
    pub skipped_orthogonal: usize,
    /// Grid points whose combine round trip was checked.
    pub combine_checked: usize,
    /// Every failing grid point.
    pub failures: Vec<AuditFailure>,
}

impl AuditReport {
    /// Returns true if no grid point failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn merge(mut self, other: Self) -> Self {
        self.interleave_checked += other.interleave_checked;
        self.skipped_orthogonal += other.skipped_orthogonal;
        self.combine_checked += other.combine_checked;
        self.failures.extend(other.failures);
        self
    }
}

/// Runs every round trip over the `range⁴` delta grid.
///
/// # Errors
///
/// Returns `Config` if `range` is zero or the configuration is invalid.
/// Failures of individual grid points are reported in the
/// [`AuditReport`], not as errors.
pub fn audit_grid(range: usize, config: &StreamConfig) -> Result<AuditReport> {
    config.validate()?;
    if range == 0 {
        return Err(StreamError::Config("audit range must be positive".into()));
    }

    // Long enough for either side to feed every sample of the probe.
    let len = config.probe_len + 1;
    let a: Vec<Tagged> = (0..len).map(Tagged::A).collect();
    let b: Vec<Tagged> = (0..len).map(Tagged::B).collect();

    let points: Vec<(usize, usize, usize, usize)> = (0..range)
        .flat_map(|l| {
            (0..range).flat_map(move |k| {
                (0..range).flat_map(move |j| (0..range).map(move |i| (i, j, k, l)))
            })
        })
        .collect();

    let report = points
        .par_iter()
        .map(|&(i, j, k, l)| {
            let delta_a = grid_delta(i + 1, l);
            let delta_b = grid_delta(j + 1, k);
            audit_point(&a, &delta_a, &b, &delta_b, config)
        })
        .reduce(AuditReport::default, AuditReport::merge);

    tracing::debug!(
        range,
        interleave_checked = report.interleave_checked,
        skipped_orthogonal = report.skipped_orthogonal,
        combine_checked = report.combine_checked,
        failures = report.failures.len(),
        "delta grid audit finished"
    );
    Ok(report)
}

fn grid_delta(real: usize, imag: usize) -> EisensteinFraction {
    EisensteinFraction::from(eisen_rings::Eisenstein::new(real, imag))
}

fn audit_point(
    a: &[Tagged],
    delta_a: &EisensteinFraction,
    b: &[Tagged],
    delta_b: &EisensteinFraction,
    config: &StreamConfig,
) -> AuditReport {
    let mut report = AuditReport::default();
    let fail = |check, reason: String| AuditFailure {
        delta_a: delta_a.clone(),
        delta_b: delta_b.clone(),
        check,
        reason,
    };

    if dot_product(delta_a, delta_b).is_positive() {
        report.interleave_checked += 1;
        if let Err(reason) = check_interleave(a, delta_a, b, delta_b, config) {
            report.failures.push(fail(AuditCheck::Interleave, reason));
        }
    } else {
        report.skipped_orthogonal += 1;
    }

    report.combine_checked += 1;
    if let Err(reason) = check_combine(a, delta_a, b, delta_b, config) {
        report.failures.push(fail(AuditCheck::Combine, reason));
    }

    report
}

/// Tags of one side in order of appearance.
fn positions(samples: &[Tagged], side_a: bool) -> Vec<usize> {
    samples
        .iter()
        .filter_map(|t| match (t, side_a) {
            (Tagged::A(n), true) | (Tagged::B(n), false) => Some(*n),
            _ => None,
        })
        .collect()
}

fn is_prefix(positions: &[usize]) -> bool {
    positions.iter().enumerate().all(|(i, &p)| i == p)
}

/// Each step advances by zero or one, starting at zero.
fn is_resampled_prefix(positions: &[usize]) -> bool {
    positions.first().map_or(true, |&p| p == 0)
        && positions.windows(2).all(|w| w[1] == w[0] || w[1] == w[0] + 1)
}

fn check_interleave(
    a: &[Tagged],
    delta_a: &EisensteinFraction,
    b: &[Tagged],
    delta_b: &EisensteinFraction,
    config: &StreamConfig,
) -> std::result::Result<(), String> {
    let (merged, delta_c) =
        interleave(a, delta_a, b, delta_b, config).map_err(|e| format!("interleave: {e}"))?;
    if !is_prefix(&positions(&merged, true)) || !is_prefix(&positions(&merged, false)) {
        return Err("interleave emitted a side out of order".into());
    }

    let (odd, recovered_a) = deinterleave_odd(&merged, &delta_c, delta_b, config)
        .map_err(|e| format!("deinterleave_odd: {e}"))?;
    if recovered_a != *delta_a {
        return Err(format!("deinterleave_odd reconstructed {recovered_a}"));
    }
    if odd.iter().any(|t| matches!(t, Tagged::A(_))) || !is_prefix(&positions(&odd, false)) {
        return Err("deinterleave_odd did not return the B prefix".into());
    }

    let (even, recovered_b) = deinterleave_even(&merged, &delta_c, delta_a, config)
        .map_err(|e| format!("deinterleave_even: {e}"))?;
    if recovered_b != *delta_b {
        return Err(format!("deinterleave_even reconstructed {recovered_b}"));
    }
    if even.iter().any(|t| matches!(t, Tagged::B(_))) || !is_prefix(&positions(&even, true)) {
        return Err("deinterleave_even did not return the A prefix".into());
    }

    Ok(())
}

fn check_combine(
    a: &[Tagged],
    delta_a: &EisensteinFraction,
    b: &[Tagged],
    delta_b: &EisensteinFraction,
    config: &StreamConfig,
) -> std::result::Result<(), String> {
    let (pairs, _) = combine(a, delta_a, b, delta_b, config).map_err(|e| format!("combine: {e}"))?;
    let (left, right): (Vec<Tagged>, Vec<Tagged>) = pairs.iter().copied().unzip();
    if !is_resampled_prefix(&positions(&left, true)) || !is_resampled_prefix(&positions(&right, false)) {
        return Err("combine skipped a sample".into());
    }

    let (split_a, _) = split(&pairs, delta_a, delta_b, config).map_err(|e| format!("split: {e}"))?;
    let split_a: Vec<Tagged> = split_a.into_iter().map(|(x, _)| x).collect();
    if !is_prefix(&positions(&split_a, true)) {
        return Err("split did not return the A prefix".into());
    }

    let (split_b, _) = split(&pairs, delta_b, delta_a, config).map_err(|e| format!("split: {e}"))?;
    let split_b: Vec<Tagged> = split_b.into_iter().map(|(_, y)| y).collect();
    if !is_prefix(&positions(&split_b, false)) {
        return Err("split did not return the B prefix".into());
    }

    Ok(())
}
