//! decomposition::seasonal — additive trend/seasonal/residual split.
//!
//! Purpose
//! -------
//! Remove the trend and fixed-period seasonal component from a monthly
//! series, returning only the residual (irregular) part for causality
//! testing. The decomposition is the classical additive moving-average
//! scheme: a centered moving-average trend, per-position seasonal means
//! of the detrended values, and the remainder as residual.
//!
//! Key behaviors
//! -------------
//! - Trend: for an even period p, the 2×p centered moving average
//!   (window p+1 with half weights on both end points); for an odd
//!   period, the plain centered p-point average. The trend is undefined
//!   for the first and last ⌊p/2⌋ points.
//! - Seasonal: the mean of detrended values at each position within the
//!   period, centered so the seasonal component sums to zero over one
//!   cycle.
//! - Residual: observation − trend − seasonal where the trend exists;
//!   **zero** at the undefined edges. Zero-filling (rather than
//!   dropping) keeps the output on the input's timestamps so downstream
//!   re-alignment stays a pure timestamp intersection. It biases edge
//!   residuals toward zero; the bias is accepted for behavioral parity
//!   with the service this crate reimplements.
//!
//! Invariants & assumptions
//! ------------------------
//! - Requires at least two full periods (`len ≥ 2·period`); shorter
//!   input is a typed error, never a silently degraded estimate.
//! - Output length and timestamps equal the input's.
//!
//! Conventions
//! -----------
//! - Period 12 is the crate-wide default, set by the pipeline options;
//!   this function takes the period explicitly.
//!
//! Downstream usage
//! ----------------
//! - The pipeline decomposes both (possibly differenced) input series
//!   and re-intersects the residuals by timestamp before the Granger
//!   stage.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that a pure linear-trend-plus-sinusoid series
//!   leaves an (interior) all-zero residual, that edges are exactly
//!   zero, and that short input errors.

use crate::decomposition::errors::{DecompositionError, DecompositionResult};
use crate::series::MonthlySeries;
use ndarray::Array1;

/// Decompose a series additively and return the residual component.
///
/// Parameters
/// ----------
/// - `series`: `&MonthlySeries`
///   Input observations; not mutated.
/// - `period`: `usize`
///   Seasonal cycle length in months (≥ 2; the pipeline uses 12).
///
/// Returns
/// -------
/// `DecompositionResult<MonthlySeries>`
///   The residual series on the input's timestamps, with zero at the
///   ⌊period/2⌋ edge points where the centered trend is undefined.
///
/// Errors
/// ------
/// - `DecompositionError::InvalidPeriod` when `period < 2`.
/// - `DecompositionError::InsufficientHistory` when
///   `series.len() < 2 * period`.
///
/// Examples
/// --------
/// ```rust
/// use chrono::NaiveDate;
/// use sector_causality::decomposition::seasonal_residual;
/// use sector_causality::series::MonthlySeries;
///
/// let months: Vec<NaiveDate> = (0..24)
///     .map(|i| NaiveDate::from_ymd_opt(2020 + i / 12, 1 + (i % 12) as u32, 1).unwrap())
///     .collect();
/// let values: Vec<f64> = (0..24).map(|i| i as f64 * 0.5).collect();
/// let series = MonthlySeries::from_parts(months, values).unwrap();
///
/// let residual = seasonal_residual(&series, 12).unwrap();
/// assert_eq!(residual.len(), series.len());
/// ```
pub fn seasonal_residual(
    series: &MonthlySeries, period: usize,
) -> DecompositionResult<MonthlySeries> {
    if period < 2 {
        return Err(DecompositionError::InvalidPeriod(period));
    }
    let n = series.len();
    if n < 2 * period {
        return Err(DecompositionError::InsufficientHistory { len: n, required: 2 * period });
    }

    let values = Array1::from_iter(series.values().iter().copied());
    let trend = centered_trend(&values, period);
    let seasonal = seasonal_means(&values, &trend, period);

    let half = period / 2;
    let residual: Vec<f64> = (0..n)
        .map(|t| match trend[t] {
            Some(trend_t) => values[t] - trend_t - seasonal[t % period],
            None => 0.0,
        })
        .collect();
    debug_assert!(trend[half].is_some() && trend[n - half - 1].is_some());

    Ok(series
        .with_values(residual)
        .expect("residual has the input's length and finite values"))
}

/// Centered moving-average trend; `None` where the window does not fit.
///
/// Even periods use the 2×p filter: a (p+1)-point window with weight
/// 1/(2p) on both end points and 1/p elsewhere, which passes linear
/// trends exactly and annihilates any zero-mean period-p pattern.
fn centered_trend(values: &Array1<f64>, period: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let half = period / 2;
    let mut trend = vec![None; n];

    if period % 2 == 0 {
        let window = period + 1;
        for (i, w) in values.windows(window).into_iter().enumerate() {
            let avg = (w.sum() - 0.5 * w[0] - 0.5 * w[window - 1]) / period as f64;
            trend[i + half] = Some(avg);
        }
    } else {
        for (i, w) in values.windows(period).into_iter().enumerate() {
            trend[i + half] = Some(w.sum() / period as f64);
        }
    }
    trend
}

/// Per-position seasonal means of the detrended series, centered to sum
/// to zero over one period. Positions are `t % period`.
fn seasonal_means(values: &Array1<f64>, trend: &[Option<f64>], period: usize) -> Vec<f64> {
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (t, trend_t) in trend.iter().enumerate() {
        if let Some(trend_t) = trend_t {
            sums[t % period] += values[t] - trend_t;
            counts[t % period] += 1;
        }
    }

    // len >= 2*period guarantees every position has at least one
    // detrended observation.
    let mut means: Vec<f64> =
        sums.iter().zip(counts.iter()).map(|(s, &c)| s / c as f64).collect();
    let grand_mean = means.iter().sum::<f64>() / period as f64;
    for m in &mut means {
        *m -= grand_mean;
    }
    means
}
