//! pipeline::orchestrator — the fixed publication/performance analysis flow.
//!
//! Purpose
//! -------
//! Run the whole causality analysis in the order the service expects:
//! align the two input series, check each for stationarity and
//! first-difference the non-stationary ones, seasonally adjust both,
//! re-align the residuals, sweep Granger lags, select the reporting
//! lag, and compute the raw and lagged Pearson correlations.
//!
//! Key behaviors
//! -------------
//! - Differencing is applied per series, only where the ADF verdict
//!   calls for it; the two series are then re-intersected on common
//!   months so one differenced side never misaligns the pair.
//! - Correlations are rounded to three decimal digits here, at the
//!   reporting boundary; every other number passes through at full
//!   precision.
//! - The outcome carries the full lag sweep and the per-series
//!   stationarity diagnostics, not just the headline numbers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs must already be aligned month-for-month; the upstream
//!   service merges the two data sources before calling in.
//! - The publication series is always the candidate cause and the
//!   performance series the caused side.
//!
//! Testing notes
//! -------------
//! - The integration tests drive this entry point on a constructed
//!   lead-by-two-months scenario and on error-path fixtures; unit tests
//!   here cover option defaults and rounding.

use crate::causality::{granger_causality, CausalitySummary};
use crate::correlation::{lagged_pearson, pearson, select_best_lag, LagSelection};
use crate::decomposition::seasonal_residual;
use crate::pipeline::errors::PipelineResult;
use crate::series::MonthlySeries;
use crate::stationarity::StationarityVerdict;

/// PipelineOptions — tunable parameters of the analysis flow.
///
/// Fields
/// ------
/// - `max_lag`: `usize` — largest Granger lag order to test
///   (default 5 months).
/// - `seasonal_period`: `usize` — cycle length for the seasonal
///   adjustment (default 12 months).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PipelineOptions {
    pub max_lag: usize,
    pub seasonal_period: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions { max_lag: 5, seasonal_period: 12 }
    }
}

/// SeriesDiagnostics — what the pipeline decided about one input series.
///
/// Fields
/// ------
/// - `verdict`: the full ADF outcome for the original series.
/// - `differenced`: whether first-differencing was applied before the
///   seasonal adjustment.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeriesDiagnostics {
    verdict: StationarityVerdict,
    differenced: bool,
}

impl SeriesDiagnostics {
    /// The ADF verdict on the original (undifferenced) series.
    pub fn verdict(&self) -> &StationarityVerdict {
        &self.verdict
    }

    /// Whether the series was first-differenced for the later stages.
    pub fn differenced(&self) -> bool {
        self.differenced
    }
}

/// PipelineOutcome — everything the analysis produces for one pair.
///
/// Purpose
/// -------
/// Carry the headline numbers (best lag, raw and lagged correlation)
/// together with the evidence behind them (the full lag sweep and the
/// per-series stationarity diagnostics), so the service layer can build
/// both terse and detailed responses from one value.
///
/// Invariants
/// ----------
/// - `raw_correlation` and `lagged_correlation` are rounded to three
///   decimal digits and lie in [−1, 1].
/// - `best_lag.lag()` never exceeds `summary.max_lag()`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PipelineOutcome {
    best_lag: LagSelection,
    raw_correlation: f64,
    lagged_correlation: f64,
    summary: CausalitySummary,
    performance: SeriesDiagnostics,
    publications: SeriesDiagnostics,
}

impl PipelineOutcome {
    /// The selected reporting lag and the basis for it.
    pub fn best_lag(&self) -> &LagSelection {
        &self.best_lag
    }

    /// Contemporaneous Pearson correlation of the adjusted series,
    /// rounded to three decimals.
    pub fn raw_correlation(&self) -> f64 {
        self.raw_correlation
    }

    /// Pearson correlation with publications leading by the selected
    /// lag, rounded to three decimals.
    pub fn lagged_correlation(&self) -> f64 {
        self.lagged_correlation
    }

    /// The full Granger lag sweep.
    pub fn summary(&self) -> &CausalitySummary {
        &self.summary
    }

    /// Stationarity diagnostics for the performance series.
    pub fn performance_diagnostics(&self) -> &SeriesDiagnostics {
        &self.performance
    }

    /// Stationarity diagnostics for the publication series.
    pub fn publication_diagnostics(&self) -> &SeriesDiagnostics {
        &self.publications
    }
}

/// Run the full analysis on an aligned (performance, publications) pair.
///
/// Parameters
/// ----------
/// - `performance`: `&MonthlySeries`
///   Monthly sector performance, the caused side.
/// - `publications`: `&MonthlySeries`
///   Monthly publication counts, the candidate cause.
/// - `options`: `&PipelineOptions`
///   Lag bound and seasonal period; use `Default::default()` for the
///   service's standard 5-lag, period-12 configuration.
///
/// Returns
/// -------
/// `PipelineResult<PipelineOutcome>`
///   The full outcome, or the first stage failure.
///
/// Errors
/// ------
/// - `PipelineError::Alignment` when the inputs are not month-for-month
///   aligned or shrink to nothing during re-alignment.
/// - `PipelineError::Stationarity`, `Decomposition`, `Causality`,
///   `Correlation` for the corresponding stage failures; see each
///   stage's error type for the concrete conditions.
pub fn run_pipeline(
    performance: &MonthlySeries, publications: &MonthlySeries, options: &PipelineOptions,
) -> PipelineResult<PipelineOutcome> {
    performance.validate_aligned_with(publications)?;

    let (perf_adjusted, perf_diag) = stationarize(performance)?;
    let (pubs_adjusted, pubs_diag) = stationarize(publications)?;

    // Differencing may have shortened one side; re-align on the months
    // both still cover.
    let (perf_adjusted, pubs_adjusted) = perf_adjusted.intersect(&pubs_adjusted)?;

    let perf_resid = seasonal_residual(&perf_adjusted, options.seasonal_period)?;
    let pubs_resid = seasonal_residual(&pubs_adjusted, options.seasonal_period)?;
    let (perf_resid, pubs_resid) = perf_resid.intersect(&pubs_resid)?;

    let summary =
        granger_causality(perf_resid.values(), pubs_resid.values(), options.max_lag)?;
    let best_lag = select_best_lag(&summary);

    let raw = pearson(perf_resid.values(), pubs_resid.values())?;
    let lagged = lagged_pearson(perf_resid.values(), pubs_resid.values(), best_lag.lag())?;

    Ok(PipelineOutcome {
        best_lag,
        raw_correlation: round3(raw),
        lagged_correlation: round3(lagged),
        summary,
        performance: perf_diag,
        publications: pubs_diag,
    })
}

/// ADF-check one series and first-difference it if non-stationary.
fn stationarize(series: &MonthlySeries) -> PipelineResult<(MonthlySeries, SeriesDiagnostics)> {
    let verdict = StationarityVerdict::augmented_dickey_fuller(series.values())?;
    if verdict.is_stationary() {
        Ok((series.clone(), SeriesDiagnostics { verdict, differenced: false }))
    } else {
        let differenced = series.difference()?;
        Ok((differenced, SeriesDiagnostics { verdict, differenced: true }))
    }
}

/// Round to three decimal digits for reporting.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
