//! stationarity::adf — Augmented Dickey–Fuller stationarity check.
//!
//! Purpose
//! -------
//! Decide whether a monthly series needs first-differencing before
//! causality testing. Runs the constant-only ADF regression
//! Δyₜ = α + γ·yₜ₋₁ + Σᵢ βᵢ·Δyₜ₋ᵢ + εₜ, with the augmentation order
//! chosen automatically by AIC, and converts the t-ratio on γ to an
//! approximate p-value via the MacKinnon (1994) response surface.
//!
//! Key behaviors
//! -------------
//! - Bound the candidate lag order by the Schwert rule
//!   ⌈12·(n/100)^{1/4}⌉, further capped at n/2 − 2.
//! - Select the augmentation order by minimum AIC over fits on a common
//!   sample (all candidates trimmed to the rows available at the maximum
//!   lag), then refit the chosen order on its full sample — the same
//!   two-pass scheme the reference statistics library uses.
//! - Verdict: `stationary = (p_value < SIGNIFICANCE_LEVEL)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input is dense (no missing values) and finite; callers drop gaps
//!   before the check. Validation enforces a minimum of
//!   [`MIN_OBSERVATIONS`](crate::stationarity::validation::MIN_OBSERVATIONS)
//!   points and non-zero variance.
//! - The input slice is never mutated; all working storage is local.
//!
//! Conventions
//! -----------
//! - Design-matrix column order is: lagged level, Δy lags (most recent
//!   first), constant. The unit-root statistic always reads column 0.
//! - Ties in the AIC scan keep the smaller lag order.
//!
//! Downstream usage
//! ----------------
//! - The pipeline orchestrator checks both input series and
//!   first-differences whichever is found non-stationary; the verdict is
//!   also carried into the pipeline outcome as a per-series diagnostic.
//!
//! Testing notes
//! -------------
//! - Unit tests verify a white-noise fixture is declared stationary, a
//!   drifting random walk is not, and that validation failures surface
//!   as typed errors. Fixtures use a deterministic xorshift generator so
//!   results are reproducible without a seeded RNG dependency.

use crate::regression::OlsFit;
use crate::stationarity::errors::StationarityResult;
use crate::stationarity::mackinnon::mackinnon_p_value;
use crate::stationarity::validation::validate_input;
use crate::SIGNIFICANCE_LEVEL;
use nalgebra::{DMatrix, DVector};

/// StationarityVerdict — outcome of one ADF stationarity check.
///
/// Purpose
/// -------
/// Represent the decision the pipeline acts on (difference or pass
/// through) together with the underlying test statistic, p-value, and
/// chosen augmentation order, so the service layer can report the
/// evidence and not just the boolean.
///
/// Fields
/// ------
/// - `stat`: `f64` — t-ratio on the lagged level (the ADF statistic).
/// - `p_value`: `f64` — MacKinnon approximate asymptotic p-value in
///   [0, 1].
/// - `used_lag`: `usize` — augmentation order selected by AIC.
/// - `n_obs`: `usize` — rows used in the final regression.
/// - `stationary`: `bool` — `p_value < 0.05`.
///
/// Invariants
/// ----------
/// - `p_value` lies in [0, 1]; `stat` is finite except in the exact-fit
///   limit (zero residual variance), where it degenerates to ±∞ and the
///   p-value clamps accordingly.
/// - `used_lag` never exceeds the Schwert bound for the input length.
///
/// Notes
/// -----
/// - A small value object; derives `Copy` so it can be embedded in the
///   pipeline outcome without ceremony.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StationarityVerdict {
    stat: f64,
    p_value: f64,
    used_lag: usize,
    n_obs: usize,
    stationary: bool,
}

impl StationarityVerdict {
    /// Run the Augmented Dickey–Fuller test with automatic lag selection.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   Dense series of at least 12 finite observations with non-zero
    ///   variance. Missing values must be dropped by the caller.
    ///
    /// Returns
    /// -------
    /// `StationarityResult<StationarityVerdict>`
    ///   The verdict, or a typed error when the input violates the
    ///   documented preconditions or the regression degenerates.
    ///
    /// Errors
    /// ------
    /// - `StationarityError::InsufficientData` below 12 observations.
    /// - `StationarityError::InvalidData` for non-finite elements.
    /// - `StationarityError::DegenerateSeries` for constant input.
    /// - `StationarityError::Regression` when the unit-root regression
    ///   is singular (for example near-constant data whose difference
    ///   lags are collinear with the constant).
    ///
    /// Panics
    /// ------
    /// - Never panics on user-facing invalid input; all such cases are
    ///   surfaced as errors.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use sector_causality::stationarity::StationarityVerdict;
    ///
    /// let data: Vec<f64> =
    ///     (0..48).map(|i| ((i * 37 + 11) % 101) as f64 / 101.0 - 0.5).collect();
    /// let verdict = StationarityVerdict::augmented_dickey_fuller(&data).unwrap();
    /// assert!((0.0..=1.0).contains(&verdict.p_value()));
    /// assert!(verdict.stat().is_finite());
    /// ```
    pub fn augmented_dickey_fuller(data: &[f64]) -> StationarityResult<Self> {
        validate_input(data)?;
        let diffs: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();
        let max_lag = schwert_max_lag(data.len());

        let used_lag = select_lag_by_aic(data, &diffs, max_lag)?;
        let fit = fit_unit_root(data, &diffs, used_lag, used_lag)?;

        let stat = fit.coefficient(0) / fit.std_error(0);
        let p_value = mackinnon_p_value(stat);

        Ok(StationarityVerdict {
            stat,
            p_value,
            used_lag,
            n_obs: fit.n_obs(),
            stationary: p_value < SIGNIFICANCE_LEVEL,
        })
    }

    /// The ADF t-statistic on the lagged level.
    pub fn stat(&self) -> f64 {
        self.stat
    }

    /// MacKinnon approximate p-value of [`stat`](Self::stat).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Augmentation order selected by the AIC scan.
    pub fn used_lag(&self) -> usize {
        self.used_lag
    }

    /// Observations used by the final regression.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Whether the unit-root null was rejected at α = 0.05.
    pub fn is_stationary(&self) -> bool {
        self.stationary
    }
}

/// Schwert's rule-of-thumb maximum augmentation order,
/// ⌈12·(n/100)^{1/4}⌉, capped so the common-sample regression keeps
/// residual degrees of freedom: at most n/2 − 2.
fn schwert_max_lag(n: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
    schwert.min(n / 2 - 2)
}

/// Choose the augmentation order in 0..=max_lag by minimum AIC.
///
/// All candidates are fitted on the common sample implied by `max_lag`
/// so their criteria are comparable; ties keep the smaller order.
/// Candidates whose lag structure is collinear (singular design) are
/// skipped — exactly periodic data makes higher orders degenerate while
/// lower orders remain well posed. Only if every candidate fails is the
/// last error surfaced.
fn select_lag_by_aic(
    data: &[f64], diffs: &[f64], max_lag: usize,
) -> StationarityResult<usize> {
    let mut best: Option<(usize, f64)> = None;
    let mut last_err = None;
    for lag in 0..=max_lag {
        match fit_unit_root(data, diffs, lag, max_lag) {
            Ok(fit) => {
                let aic = fit.aic();
                if best.map_or(true, |(_, best_aic)| aic < best_aic) {
                    best = Some((lag, aic));
                }
            }
            Err(err) => last_err = Some(err),
        }
    }
    match best {
        Some((lag, _)) => Ok(lag),
        None => Err(last_err.expect("0..=max_lag is non-empty")),
    }
}

/// Fit Δyₜ on [yₜ₋₁, Δyₜ₋₁..Δyₜ₋ₗ, 1] over rows t = start..diffs.len().
///
/// `start` ≥ `lag` controls the sample: the AIC scan passes the maximum
/// candidate order so every candidate sees identical rows; the final fit
/// passes `lag` itself to use the longest sample the order allows.
fn fit_unit_root(
    data: &[f64], diffs: &[f64], lag: usize, start: usize,
) -> StationarityResult<OlsFit> {
    debug_assert!(start >= lag);
    let rows = diffs.len() - start;
    let cols = lag + 2;

    let y = DVector::from_fn(rows, |r, _| diffs[start + r]);
    let x = DMatrix::from_fn(rows, cols, |r, c| {
        let t = start + r;
        if c == 0 {
            data[t]
        } else if c <= lag {
            diffs[t - c]
        } else {
            1.0
        }
    });

    Ok(OlsFit::fit(&y, &x)?)
}
