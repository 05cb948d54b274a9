//! causality::granger — lag-sweep Granger causality F-tests.
//!
//! Purpose
//! -------
//! Test whether lagged values of a candidate *cause* series improve
//! one-step prediction of a *caused* series beyond the caused series'
//! own lags. For every lag order L in 1..=max_lag the module fits a
//! restricted autoregression (own lags plus constant) and an
//! unrestricted one (own lags, cause lags, constant) on the same rows
//! and compares residual sums of squares with the ssr F-test.
//!
//! Key behaviors
//! -------------
//! - Both models at lag L use rows t = L..n, so the restricted and
//!   unrestricted fits are always compared on identical samples.
//! - F = ((rss_r − rss_u)/L) / (rss_u / df_denom) with
//!   df_denom = (n − L) − (2L + 1); p = 1 − F_{L,df_denom}(F).
//! - An (numerically) exact unrestricted fit collapses the denominator;
//!   the statistic is reported as +∞ with p = 0, the limit of the test.
//! - Negative F from floating-point cancellation clamps to 0.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated once, for the largest lag, by
//!   [`validate_pair`](crate::causality::validation::validate_pair);
//!   every smaller lag then has strictly more residual degrees of
//!   freedom.
//! - Lag orders in a [`CausalitySummary`] are contiguous from 1.
//!
//! Conventions
//! -----------
//! - Unrestricted design-column order: own lags (most recent first),
//!   cause lags (most recent first), constant. The restricted design is
//!   the same with the cause block removed.
//! - Significance is judged at the crate-wide
//!   [`SIGNIFICANCE_LEVEL`](crate::SIGNIFICANCE_LEVEL).
//!
//! Downstream usage
//! ----------------
//! - The pipeline runs the sweep on seasonally adjusted residuals with
//!   the publication series as `cause` and the sector performance
//!   series as `caused`, then feeds the summary to lag selection.
//!
//! Testing notes
//! -------------
//! - Tests construct series with a known lagged dependence and check the
//!   dependence lag is detected; a pure-noise pair checks the null is
//!   (almost always) retained. Fixtures are deterministic.

use std::collections::BTreeMap;

use crate::causality::errors::{GrangerError, GrangerResult};
use crate::causality::validation::validate_pair;
use crate::regression::OlsFit;
use crate::SIGNIFICANCE_LEVEL;
use nalgebra::{DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// LagResult — one lag order's F-test outcome.
///
/// Fields
/// ------
/// - `lag`: `usize` — the lag order tested.
/// - `f_stat`: `f64` — ssr F-statistic (≥ 0, possibly +∞).
/// - `p_value`: `f64` — upper-tail probability in [0, 1].
/// - `significant`: `bool` — `p_value < 0.05`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LagResult {
    pub lag: usize,
    pub f_stat: f64,
    pub p_value: f64,
    pub significant: bool,
}

/// CausalitySummary — F-test outcomes for every lag in 1..=max_lag.
///
/// Purpose
/// -------
/// Hold the full lag sweep in ascending lag order so lag selection can
/// scan deterministically and reports can show the whole evidence
/// table, not just the winner.
///
/// Invariants
/// ----------
/// - Lags are contiguous from 1 to [`max_lag`](Self::max_lag); the
///   constructor rejects gaps and duplicates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CausalitySummary {
    by_lag: BTreeMap<usize, LagResult>,
}

impl CausalitySummary {
    /// Build a summary from per-lag results.
    ///
    /// Parameters
    /// ----------
    /// - `results`: `Vec<LagResult>`
    ///   One entry per lag order, in any order.
    ///
    /// Errors
    /// ------
    /// - `GrangerError::InvalidMaxLag` when the set of lags is empty or
    ///   is not exactly {1, …, K} for some K.
    pub fn from_lag_results(results: Vec<LagResult>) -> GrangerResult<Self> {
        let mut by_lag = BTreeMap::new();
        for result in results {
            if by_lag.insert(result.lag, result).is_some() {
                return Err(GrangerError::InvalidMaxLag);
            }
        }
        let contiguous = by_lag
            .keys()
            .enumerate()
            .all(|(i, &lag)| lag == i + 1);
        if by_lag.is_empty() || !contiguous {
            return Err(GrangerError::InvalidMaxLag);
        }
        Ok(CausalitySummary { by_lag })
    }

    /// The result for one lag order, if it was tested.
    pub fn get(&self, lag: usize) -> Option<&LagResult> {
        self.by_lag.get(&lag)
    }

    /// Results in ascending lag order.
    pub fn iter(&self) -> impl Iterator<Item = &LagResult> {
        self.by_lag.values()
    }

    /// The largest lag order tested.
    pub fn max_lag(&self) -> usize {
        *self.by_lag.keys().next_back().expect("summary is never empty")
    }
}

/// Run the Granger lag sweep for lags 1..=max_lag.
///
/// Parameters
/// ----------
/// - `caused`: `&[f64]`
///   The series whose future is being predicted (sector performance in
///   the pipeline).
/// - `cause`: `&[f64]`
///   The candidate predictor (publication volume in the pipeline).
/// - `max_lag`: `usize`
///   Largest lag order to test (≥ 1).
///
/// Returns
/// -------
/// `GrangerResult<CausalitySummary>`
///   Per-lag F-statistics and p-values for every lag in 1..=max_lag.
///
/// Errors
/// ------
/// - Any [`GrangerError`] from
///   [`validate_pair`](crate::causality::validation::validate_pair).
/// - `GrangerError::Regression` when a lag's design is singular (for
///   example exactly collinear lag structures).
///
/// Examples
/// --------
/// ```rust
/// use sector_causality::causality::granger_causality;
///
/// let cause: Vec<f64> =
///     (0..40).map(|t| ((t * 37 + 11) % 101) as f64 / 101.0 - 0.5).collect();
/// // caused echoes the cause one step later with a small perturbation.
/// let caused: Vec<f64> = (0..40)
///     .map(|t| {
///         let echo = if t == 0 { 0.0 } else { cause[t - 1] };
///         echo + ((t * 53 + 29) % 97) as f64 / 970.0
///     })
///     .collect();
///
/// let summary = granger_causality(&caused, &cause, 2).unwrap();
/// assert!(summary.get(1).unwrap().significant);
/// ```
pub fn granger_causality(
    caused: &[f64], cause: &[f64], max_lag: usize,
) -> GrangerResult<CausalitySummary> {
    validate_pair(caused, cause, max_lag)?;

    let mut results = Vec::with_capacity(max_lag);
    for lag in 1..=max_lag {
        results.push(test_single_lag(caused, cause, lag)?);
    }
    CausalitySummary::from_lag_results(results)
}

/// F-test for one lag order on rows t = lag..n.
fn test_single_lag(caused: &[f64], cause: &[f64], lag: usize) -> GrangerResult<LagResult> {
    let n = caused.len();
    let rows = n - lag;

    let y = DVector::from_fn(rows, |r, _| caused[lag + r]);
    // Columns: own lags, then cause lags, then the constant.
    let unrestricted = DMatrix::from_fn(rows, 2 * lag + 1, |r, c| {
        let t = lag + r;
        if c < lag {
            caused[t - 1 - c]
        } else if c < 2 * lag {
            cause[t - 1 - (c - lag)]
        } else {
            1.0
        }
    });
    let restricted = DMatrix::from_fn(rows, lag + 1, |r, c| {
        let t = lag + r;
        if c < lag {
            caused[t - 1 - c]
        } else {
            1.0
        }
    });

    let fit_u = OlsFit::fit(&y, &unrestricted)?;
    let fit_r = OlsFit::fit(&y, &restricted)?;

    let df_denom = fit_u.df_resid() as f64;
    let rss_u = fit_u.rss();
    let rss_r = fit_r.rss();

    let (f_stat, p_value) = if rss_u <= f64::EPSILON * rss_r.max(1.0) {
        // The unrestricted model fits exactly; the test statistic
        // diverges and the null is rejected with certainty.
        (f64::INFINITY, 0.0)
    } else {
        let f = (((rss_r - rss_u) / lag as f64) / (rss_u / df_denom)).max(0.0);
        let dist = FisherSnedecor::new(lag as f64, df_denom)
            .expect("positive degrees of freedom by validation");
        (f, 1.0 - dist.cdf(f))
    };

    Ok(LagResult { lag, f_stat, p_value, significant: p_value < SIGNIFICANCE_LEVEL })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Detection of a planted lag-1 and lag-3 dependence.
    // - Near-universal retention of the null on independent noise.
    // - Summary construction invariants (contiguity, duplicates).
    // - Sweep-level error propagation.
    //
    // They intentionally DO NOT cover:
    // - Exact agreement of F-statistics with external software; the
    //   regression layer is verified independently and the detection
    //   tests pin the behavior that matters downstream.
    // -------------------------------------------------------------------------

    /// Deterministic white-noise fixture in roughly [-0.5, 0.5].
    fn xorshift_noise(mut state: u64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
            })
            .collect()
    }

    #[test]
    // Purpose
    // -------
    // A caused series that is literally the cause shifted by one step
    // (plus small independent noise) must test significant at lag 1.
    //
    // Given
    // -----
    // - 60 points; caused[t] = cause[t-1] + 0.05·independent noise.
    //
    // Expect
    // ------
    // - Lag 1 significant with a tiny p-value.
    fn detects_lag_one_dependence() {
        // Arrange
        let cause = xorshift_noise(0xA5A5A5A5DEADBEEF, 60);
        let perturbation = xorshift_noise(0x1357924680ACE, 60);
        let caused: Vec<f64> = (0..60)
            .map(|t| {
                let echo = if t == 0 { 0.0 } else { cause[t - 1] };
                echo + 0.05 * perturbation[t]
            })
            .collect();

        // Act
        let summary = granger_causality(&caused, &cause, 3).expect("fixture passes validation");

        // Assert
        let lag1 = summary.get(1).expect("lag 1 tested");
        assert!(lag1.significant, "p = {}", lag1.p_value);
        assert!(lag1.p_value < 1e-6);
        assert!(lag1.f_stat > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // A dependence planted exactly at lag 3 must give lag 3 the lowest
    // p-value in the sweep, and a significant one.
    //
    // Given
    // -----
    // - 60 points; caused[t] = cause[t-3] + 0.05·independent noise.
    //
    // Expect
    // ------
    // - Lag 3 significant, with p no larger than any other lag's.
    fn detects_lag_three_dependence() {
        // Arrange
        let cause = xorshift_noise(0xFEEDFACE12345678, 60);
        let perturbation = xorshift_noise(0x0F0F0F0F0F0F0F, 60);
        let caused: Vec<f64> = (0..60)
            .map(|t| {
                let echo = if t < 3 { 0.0 } else { cause[t - 3] };
                echo + 0.05 * perturbation[t]
            })
            .collect();

        // Act
        let summary = granger_causality(&caused, &cause, 5).expect("fixture passes validation");

        // Assert
        let lag3 = summary.get(3).expect("lag 3 tested");
        assert!(lag3.significant, "p = {}", lag3.p_value);
        for result in summary.iter() {
            assert!(
                lag3.p_value <= result.p_value,
                "lag {} beat lag 3: {} < {}",
                result.lag,
                result.p_value,
                lag3.p_value
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Independent noise pairs should (almost always) retain the null at
    // every lag. With five lags at α = 0.05 a single false positive has
    // non-trivial probability, so the assertion allows at most one.
    //
    // Given
    // -----
    // - Two independent 64-point noise fixtures, max_lag = 5.
    //
    // Expect
    // ------
    // - At most one of the five lags tests significant.
    fn independent_noise_mostly_retains_null() {
        let caused = xorshift_noise(0x123456789ABCDEF0, 64);
        let cause = xorshift_noise(0x0FEDCBA987654321, 64);

        let summary = granger_causality(&caused, &cause, 5).expect("fixture passes validation");

        let significant = summary.iter().filter(|r| r.significant).count();
        assert!(significant <= 1, "{significant} of 5 lags significant on independent noise");
        for result in summary.iter() {
            assert!((0.0..=1.0).contains(&result.p_value));
            assert!(result.f_stat >= 0.0);
        }
    }

    #[test]
    // Purpose
    // -------
    // The summary constructor enforces contiguous lags starting at 1.
    //
    // Given
    // -----
    // - Result sets with a gap, a duplicate, a non-1 start, and an empty
    //   set.
    //
    // Expect
    // ------
    // - InvalidMaxLag for each; a proper {1, 2, 3} set succeeds.
    fn summary_requires_contiguous_lags() {
        let result = |lag: usize| LagResult { lag, f_stat: 1.0, p_value: 0.5, significant: false };

        assert!(CausalitySummary::from_lag_results(vec![result(1), result(3)]).is_err());
        assert!(CausalitySummary::from_lag_results(vec![result(1), result(1)]).is_err());
        assert!(CausalitySummary::from_lag_results(vec![result(2), result(3)]).is_err());
        assert!(CausalitySummary::from_lag_results(vec![]).is_err());

        let summary = CausalitySummary::from_lag_results(vec![result(2), result(1), result(3)])
            .expect("contiguous lags accepted in any order");
        assert_eq!(summary.max_lag(), 3);
        assert_eq!(summary.iter().count(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Validation errors surface through the sweep entry point.
    //
    // Given
    // -----
    // - A 10-point pair with max_lag = 5 (needs 17).
    //
    // Expect
    // ------
    // - InsufficientData { 10, 17 }.
    fn sweep_propagates_validation_errors() {
        let short = xorshift_noise(99, 10);
        assert_eq!(
            granger_causality(&short, &short.clone(), 5),
            Err(GrangerError::InsufficientData { n_obs: 10, required: 17 })
        );
    }
}
