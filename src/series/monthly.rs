//! series::monthly — validated monthly time series and alignment helpers.
//!
//! Purpose
//! -------
//! Provide [`MonthlySeries`], the single data carrier handed between
//! pipeline stages: an ordered sequence of (month, value) observations
//! with strictly increasing timestamps and finite values. Transformations
//! that shrink the usable range (first-differencing) or require
//! re-alignment (timestamp intersection after decomposition) live here so
//! that the statistical stages can operate on plain `&[f64]` slices.
//!
//! Key behaviors
//! -------------
//! - Enforce ordering and finiteness once, at construction; downstream
//!   numeric code never defends against NaN or unordered data.
//! - First-difference a series, dropping the first (now undefined) point
//!   while keeping the remaining timestamps intact.
//! - Intersect two series on their common months, preserving order, so
//!   paired statistics operate on index-aligned slices.
//!
//! Invariants & assumptions
//! ------------------------
//! - Timestamps are strictly increasing; one observation per calendar
//!   month by convention (first-of-month labels). Gaps are permitted —
//!   the upstream merge may legitimately skip months with no data.
//! - `timestamps().len() == values().len()` always holds.
//! - All values are finite.
//!
//! Conventions
//! -----------
//! - Paired operations (`validate_aligned_with`) treat any length or
//!   timestamp disagreement as a caller error surfaced via
//!   [`SeriesError`]; nothing is truncated silently.
//!
//! Downstream usage
//! ----------------
//! - The pipeline orchestrator validates alignment of its two inputs,
//!   differences non-stationary series, and re-intersects the
//!   decomposition residuals before causality testing.
//!
//! Testing notes
//! -------------
//! - Unit tests cover constructor validation, differencing arithmetic and
//!   timestamp handling, intersection on partially overlapping ranges,
//!   and the alignment guard's error branches.

use crate::series::errors::{SeriesError, SeriesResult};
use chrono::NaiveDate;

/// MonthlySeries — ordered monthly observations with validated shape.
///
/// Purpose
/// -------
/// Carry one monthly time series (sector returns or publication counts)
/// through the pipeline with its month labels, so stages that shrink or
/// re-align the usable range can do so by timestamp rather than by index
/// bookkeeping.
///
/// Invariants
/// ----------
/// - `timestamps` is strictly increasing.
/// - `values` contains only finite numbers.
/// - Both vectors have identical, non-zero length.
///
/// Notes
/// -----
/// - The type is deliberately immutable: every transformation returns a
///   new series, so concurrent pipeline runs never share mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    timestamps: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Build a series from parallel timestamp and value vectors.
    ///
    /// Parameters
    /// ----------
    /// - `timestamps`: `Vec<NaiveDate>`
    ///   Month labels, strictly increasing.
    /// - `values`: `Vec<f64>`
    ///   Observations, all finite, one per timestamp.
    ///
    /// Returns
    /// -------
    /// `SeriesResult<MonthlySeries>`
    ///   The validated series, or a [`SeriesError`] naming the first
    ///   violated constraint.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::Empty` when no observations are supplied.
    /// - `SeriesError::LengthMismatch` when the vectors differ in length.
    /// - `SeriesError::OutOfOrderTimestamp` when a timestamp is not
    ///   strictly after its predecessor.
    /// - `SeriesError::NonFiniteValue` when a value is NaN or infinite.
    pub fn from_parts(timestamps: Vec<NaiveDate>, values: Vec<f64>) -> SeriesResult<Self> {
        if timestamps.is_empty() && values.is_empty() {
            return Err(SeriesError::Empty);
        }
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        for (index, window) in timestamps.windows(2).enumerate() {
            if window[1] <= window[0] {
                return Err(SeriesError::OutOfOrderTimestamp { index: index + 1 });
            }
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue { index, value });
            }
        }
        Ok(MonthlySeries { timestamps, values })
    }

    /// Build a series from (month, value) pairs.
    ///
    /// Convenience wrapper around [`MonthlySeries::from_parts`]; the same
    /// validation rules apply.
    pub fn from_points(points: Vec<(NaiveDate, f64)>) -> SeriesResult<Self> {
        let (timestamps, values) = points.into_iter().unzip();
        MonthlySeries::from_parts(timestamps, values)
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no observations. Always `false` for a
    /// constructed series, but kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observation values in timestamp order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Month labels in ascending order.
    pub fn timestamps(&self) -> &[NaiveDate] {
        &self.timestamps
    }

    /// Iterate over (month, value) pairs in timestamp order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }

    /// First-difference the series.
    ///
    /// Returns a series of `len() - 1` observations where the value at
    /// each remaining timestamp t is `x[t] - x[t-1]`. The first point has
    /// no predecessor and is dropped rather than zero-filled, so the
    /// differenced series starts one month later than the input.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::TooShort` when the series has fewer than 2 points.
    pub fn difference(&self) -> SeriesResult<MonthlySeries> {
        if self.len() < 2 {
            return Err(SeriesError::TooShort { len: self.len(), required: 2 });
        }
        let timestamps = self.timestamps[1..].to_vec();
        let values = self.values.windows(2).map(|w| w[1] - w[0]).collect();
        // Ordering and finiteness carry over from the parent series.
        Ok(MonthlySeries { timestamps, values })
    }

    /// Replace the values of this series, keeping its timestamps.
    ///
    /// Used by the decomposition stage, which produces one residual per
    /// input month. The replacement vector must match the series length
    /// and contain only finite values.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::LengthMismatch` when `values` has a different
    ///   length than the series.
    /// - `SeriesError::NonFiniteValue` when a replacement value is not
    ///   finite.
    pub fn with_values(&self, values: Vec<f64>) -> SeriesResult<MonthlySeries> {
        if values.len() != self.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps: self.len(),
                values: values.len(),
            });
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue { index, value });
            }
        }
        Ok(MonthlySeries { timestamps: self.timestamps.clone(), values })
    }

    /// Intersect two series on their common months.
    ///
    /// Returns the two sub-series restricted to timestamps present in
    /// both inputs, in ascending order. The results have equal length and
    /// identical timestamps, making them safe inputs for paired
    /// statistics. An empty intersection yields a
    /// `SeriesError::TooShort { len: 0, required: 1 }`.
    pub fn intersect(&self, other: &MonthlySeries) -> SeriesResult<(MonthlySeries, MonthlySeries)> {
        let mut left_ts = Vec::new();
        let mut left_vals = Vec::new();
        let mut right_vals = Vec::new();

        let mut i = 0;
        let mut j = 0;
        while i < self.len() && j < other.len() {
            match self.timestamps[i].cmp(&other.timestamps[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    left_ts.push(self.timestamps[i]);
                    left_vals.push(self.values[i]);
                    right_vals.push(other.values[j]);
                    i += 1;
                    j += 1;
                }
            }
        }

        if left_ts.is_empty() {
            return Err(SeriesError::TooShort { len: 0, required: 1 });
        }
        let right_ts = left_ts.clone();
        Ok((
            MonthlySeries { timestamps: left_ts, values: left_vals },
            MonthlySeries { timestamps: right_ts, values: right_vals },
        ))
    }

    /// Check that another series shares this one's length and timestamps.
    ///
    /// Errors
    /// ------
    /// - `SeriesError::MisalignedLength` on differing lengths.
    /// - `SeriesError::TimestampMismatch` naming the first disagreeing
    ///   index otherwise.
    pub fn validate_aligned_with(&self, other: &MonthlySeries) -> SeriesResult<()> {
        if self.len() != other.len() {
            return Err(SeriesError::MisalignedLength { left: self.len(), right: other.len() });
        }
        for (index, (a, b)) in self.timestamps.iter().zip(other.timestamps.iter()).enumerate() {
            if a != b {
                return Err(SeriesError::TimestampMismatch { index });
            }
        }
        Ok(())
    }
}
