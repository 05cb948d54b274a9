//! correlation::pearson — contemporaneous and lead-lag Pearson correlation.
//!
//! Purpose
//! -------
//! Quantify the strength of the relationship the Granger stage only
//! tests for: the plain Pearson correlation of two aligned series, and
//! the *predictive* lagged variant that pairs the cause at time t with
//! the caused series at time t + lag.
//!
//! Key behaviors
//! -------------
//! - [`lagged_pearson`] shifts in the forward direction: the cause
//!   leads, the caused follows. A lag of 0 reduces to [`pearson`].
//! - Lagging drops `lag` pairs from the overlap; fewer than two
//!   remaining pairs is a typed error, never a NaN.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned coefficients lie in [−1, 1] up to floating-point noise;
//!   zero-variance windows are rejected rather than producing NaN.
//! - No rounding happens here; presentation rounding is the pipeline
//!   boundary's job.
//!
//! Downstream usage
//! ----------------
//! - The pipeline reports both the raw correlation and the correlation
//!   at the selected best lag.
//!
//! Testing notes
//! -------------
//! - Tests pin the sign conventions (perfect positive and negative
//!   correlation), the predictive direction of the lagged variant, and
//!   every error branch.

use crate::correlation::errors::{CorrelationError, CorrelationResult};

/// Pearson correlation coefficient of two aligned series.
///
/// Parameters
/// ----------
/// - `left`, `right`: `&[f64]`
///   Equal-length, finite series.
///
/// Returns
/// -------
/// `CorrelationResult<f64>`
///   The coefficient in [−1, 1].
///
/// Errors
/// ------
/// - `CorrelationError::MisalignedLength` on unequal lengths.
/// - `CorrelationError::InsufficientOverlap` below two pairs.
/// - `CorrelationError::DegenerateSeries` when either side has zero
///   variance.
pub fn pearson(left: &[f64], right: &[f64]) -> CorrelationResult<f64> {
    if left.len() != right.len() {
        return Err(CorrelationError::MisalignedLength {
            left: left.len(),
            right: right.len(),
        });
    }
    let n = left.len();
    if n < 2 {
        return Err(CorrelationError::InsufficientOverlap { available: n, required: 2 });
    }

    let mean_l = left.iter().sum::<f64>() / n as f64;
    let mean_r = right.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_l = 0.0;
    let mut var_r = 0.0;
    for (&l, &r) in left.iter().zip(right.iter()) {
        let dl = l - mean_l;
        let dr = r - mean_r;
        cov += dl * dr;
        var_l += dl * dl;
        var_r += dr * dr;
    }
    if var_l == 0.0 || var_r == 0.0 {
        return Err(CorrelationError::DegenerateSeries);
    }
    Ok(cov / (var_l.sqrt() * var_r.sqrt()))
}

/// Pearson correlation of `cause` at time t against `caused` at t + lag.
///
/// Parameters
/// ----------
/// - `caused`: `&[f64]`
///   The series expected to follow.
/// - `cause`: `&[f64]`
///   The series expected to lead.
/// - `lag`: `usize`
///   Number of steps the caused series trails the cause.
///
/// Returns
/// -------
/// `CorrelationResult<f64>`
///   The coefficient over the `len − lag` overlapping pairs.
///
/// Errors
/// ------
/// - `CorrelationError::MisalignedLength` on unequal lengths.
/// - `CorrelationError::InsufficientOverlap` when fewer than two pairs
///   survive the shift.
/// - `CorrelationError::DegenerateSeries` when either window is
///   constant over the overlap.
///
/// Examples
/// --------
/// ```rust
/// use sector_causality::correlation::lagged_pearson;
///
/// // caused echoes cause two steps later.
/// let cause: Vec<f64> = (0..20).map(|t| ((t * 7) % 5) as f64).collect();
/// let caused: Vec<f64> =
///     (0..20).map(|t| if t < 2 { 0.0 } else { cause[t - 2] }).collect();
///
/// let r = lagged_pearson(&caused, &cause, 2).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn lagged_pearson(caused: &[f64], cause: &[f64], lag: usize) -> CorrelationResult<f64> {
    if caused.len() != cause.len() {
        return Err(CorrelationError::MisalignedLength {
            left: caused.len(),
            right: cause.len(),
        });
    }
    let n = caused.len();
    let available = n.saturating_sub(lag);
    if available < 2 {
        return Err(CorrelationError::InsufficientOverlap { available, required: 2 });
    }
    // cause[t] leads caused[t + lag]: drop the first `lag` caused points
    // and the last `lag` cause points.
    pearson(&caused[lag..], &cause[..n - lag])
}
