//! Integration tests for the publication/performance causality pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end flow: aligned monthly inputs, stationarity
//!   checks with conditional differencing, seasonal adjustment, the
//!   Granger lag sweep, best-lag selection, and correlation reporting.
//! - Exercise a realistic lead-lag scenario (publications leading
//!   returns by two months through a shared seasonal driver) rather
//!   than toy edge cases only.
//!
//! Coverage
//! --------
//! - `pipeline::run_pipeline`:
//!   - Detection of a constructed two-month lead, including best-lag
//!     selection and the lagged-vs-raw correlation comparison.
//!   - Graceful completion on independent inputs with in-range outputs.
//!   - Typed error propagation for misaligned and too-short inputs.
//! - `series::MonthlySeries`:
//!   - Construction from realistic month grids with gaps handled by
//!     intersection inside the pipeline.
//!
//! Exclusions
//! ----------
//! - Fine-grained behavior of individual stages (ADF lag selection,
//!   decomposition arithmetic, F-statistics) — covered by unit tests.
//! - Serialization of outcome types — a thin derive exercised at the
//!   service level.
use chrono::NaiveDate;
use sector_causality::{
    pipeline::{run_pipeline, PipelineError, PipelineOptions},
    decomposition::DecompositionError,
    series::{MonthlySeries, SeriesError},
};

/// Purpose
/// -------
/// Deterministic white-noise fixture in roughly [-0.5, 0.5], so the
/// scenarios below are reproducible without a seeded RNG dependency.
///
/// Parameters
/// ----------
/// - `state`: Non-zero xorshift seed; distinct seeds give effectively
///   independent sequences.
/// - `n`: Number of values to generate.
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

/// First-of-month labels for `n` consecutive months starting January of
/// `start_year`.
fn month_grid(start_year: i32, n: usize) -> Vec<NaiveDate> {
    (0..n)
        .map(|i| {
            NaiveDate::from_ymd_opt(start_year + (i / 12) as i32, 1 + (i % 12) as u32, 1)
                .expect("valid calendar month")
        })
        .collect()
}

/// Purpose
/// -------
/// Build the central scenario: a seasonal driver with mild drift and
/// noise, observed by the publication series two months ahead of the
/// performance series.
///
/// Construction
/// ------------
/// - Driver: g[t] = seasonal pattern (period 12) + 0.0005·t drift +
///   0.02·noise.
/// - Publications: 500 + 1000·g[t + 2] — the same signal, scaled to
///   count magnitudes, visible two months early.
/// - Performance: g[t] + 0.005·independent noise.
///
/// Returns
/// -------
/// - `(performance, publications)` on a shared 48-month grid.
fn lead_by_two_scenario() -> (MonthlySeries, MonthlySeries) {
    const PATTERN: [f64; 12] = [
        0.01, -0.02, 0.03, 0.0, 0.015, -0.01, 0.02, 0.005, -0.015, 0.025, 0.01, -0.005,
    ];
    let n = 48;
    let driver_noise = xorshift_noise(0x5DEECE66D_2026, n + 2);
    let obs_noise = xorshift_noise(0xB5026F5AA96619E9, n);

    let driver: Vec<f64> = (0..n + 2)
        .map(|t| PATTERN[t % 12] + 0.0005 * t as f64 + 0.02 * driver_noise[t])
        .collect();
    let publications: Vec<f64> = (0..n).map(|t| 500.0 + 1000.0 * driver[t + 2]).collect();
    let performance: Vec<f64> = (0..n).map(|t| driver[t] + 0.005 * obs_noise[t]).collect();

    let months = month_grid(2019, n);
    (
        MonthlySeries::from_parts(months.clone(), performance).expect("valid fixture"),
        MonthlySeries::from_parts(months, publications).expect("valid fixture"),
    )
}

#[test]
// Purpose
// -------
// The central claim of the analysis: when publications genuinely lead
// performance by two months, the pipeline selects lag 2 on a
// significant test and the lagged correlation beats the raw one.
//
// Given
// -----
// - The 48-month lead-by-two scenario.
//
// Expect
// ------
// - best_lag = 2 and significant; |lagged| > |raw|; lagged strongly
//   positive; all reported correlations within [-1, 1].
fn detects_two_month_publication_lead() {
    // Arrange
    let (performance, publications) = lead_by_two_scenario();

    // Act
    let outcome = run_pipeline(&performance, &publications, &PipelineOptions::default())
        .expect("lead-by-two scenario completes");

    // Assert
    assert_eq!(outcome.best_lag().lag(), 2, "sweep: {:?}", outcome.summary());
    assert!(outcome.best_lag().is_significant());
    assert!(
        outcome.lagged_correlation().abs() > outcome.raw_correlation().abs(),
        "lagged {} should beat raw {}",
        outcome.lagged_correlation(),
        outcome.raw_correlation()
    );
    assert!(outcome.lagged_correlation() > 0.5);
    assert!(outcome.raw_correlation().abs() <= 1.0);
    assert!(outcome.lagged_correlation().abs() <= 1.0);
}

#[test]
// Purpose
// -------
// On independent inputs the pipeline must still complete and report
// sane values; the selected lag stays within the sweep and the
// correlations within range. (With five lags at α = 0.05 an occasional
// significant lag on noise is legitimate, so significance itself is not
// asserted either way.)
//
// Given
// -----
// - Two independent 48-month noise series with count-like and
//   return-like magnitudes.
//
// Expect
// ------
// - A successful outcome with lag in 1..=5 and both correlations in
//   [-1, 1], rounded to three decimals.
fn completes_on_independent_inputs() {
    // Arrange
    let months = month_grid(2018, 48);
    let perf: Vec<f64> =
        xorshift_noise(0xA076_1D64_78BD_642F, 48).iter().map(|n| 0.05 * n).collect();
    let pubs: Vec<f64> =
        xorshift_noise(0xE703_7ED1_A0B4_28DB, 48).iter().map(|n| 450.0 + 120.0 * n).collect();
    let performance = MonthlySeries::from_parts(months.clone(), perf).expect("valid fixture");
    let publications = MonthlySeries::from_parts(months, pubs).expect("valid fixture");

    // Act
    let outcome = run_pipeline(&performance, &publications, &PipelineOptions::default())
        .expect("independent inputs complete");

    // Assert
    let lag = outcome.best_lag().lag();
    assert!((1..=5).contains(&lag));
    assert_eq!(outcome.summary().max_lag(), 5);
    for value in [outcome.raw_correlation(), outcome.lagged_correlation()] {
        assert!((-1.0..=1.0).contains(&value));
        assert_eq!(value, (value * 1000.0).round() / 1000.0, "not rounded: {value}");
    }
}

#[test]
// Purpose
// -------
// Inputs that are not month-for-month aligned are rejected up front
// with an alignment error, before any statistics run.
//
// Given
// -----
// - Two 30-month series starting one month apart, and a 30 vs 29 pair.
//
// Expect
// ------
// - `PipelineError::Alignment` with the series-level mismatch inside.
fn rejects_misaligned_inputs() {
    let perf_values = xorshift_noise(11, 30);
    let pub_values = xorshift_noise(22, 30);

    let a = MonthlySeries::from_parts(month_grid(2020, 30), perf_values.clone()).unwrap();
    let shifted_months: Vec<NaiveDate> = month_grid(2020, 31)[1..].to_vec();
    let b = MonthlySeries::from_parts(shifted_months, pub_values.clone()).unwrap();
    match run_pipeline(&a, &b, &PipelineOptions::default()) {
        Err(PipelineError::Alignment(SeriesError::TimestampMismatch { index: 0 })) => (),
        other => panic!("expected timestamp mismatch, got {other:?}"),
    }

    let short = MonthlySeries::from_parts(month_grid(2020, 29), pub_values[..29].to_vec()).unwrap();
    match run_pipeline(&a, &short, &PipelineOptions::default()) {
        Err(PipelineError::Alignment(SeriesError::MisalignedLength { left: 30, right: 29 })) => (),
        other => panic!("expected length mismatch, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// A pair long enough for the stationarity check but shorter than two
// seasonal periods must fail in the decomposition stage with a typed
// error, not a panic or a degraded estimate.
//
// Given
// -----
// - Two aligned 20-month noise series (period 12 needs 24).
//
// Expect
// ------
// - `PipelineError::Decomposition(InsufficientHistory { .. })`.
fn surfaces_insufficient_history_for_decomposition() {
    let months = month_grid(2021, 20);
    let performance =
        MonthlySeries::from_parts(months.clone(), xorshift_noise(333, 20)).unwrap();
    let publications = MonthlySeries::from_parts(months, xorshift_noise(444, 20)).unwrap();

    match run_pipeline(&performance, &publications, &PipelineOptions::default()) {
        Err(PipelineError::Decomposition(DecompositionError::InsufficientHistory {
            ..
        })) => (),
        other => panic!("expected InsufficientHistory, got {other:?}"),
    }
}

#[test]
// Purpose
// -------
// The seasonal period and lag bound are honored when overridden: a
// period-6 configuration accepts series too short for period 12, and a
// max_lag of 3 caps the sweep.
//
// Given
// -----
// - Two aligned 20-month noise series with
//   `PipelineOptions { max_lag: 3, seasonal_period: 6 }`.
//
// Expect
// ------
// - A successful outcome whose sweep stops at lag 3.
fn honors_custom_options() {
    let months = month_grid(2022, 20);
    let performance =
        MonthlySeries::from_parts(months.clone(), xorshift_noise(555, 20)).unwrap();
    let publications = MonthlySeries::from_parts(months, xorshift_noise(666, 20)).unwrap();

    let options = PipelineOptions { max_lag: 3, seasonal_period: 6 };
    let outcome = run_pipeline(&performance, &publications, &options)
        .expect("20 months suffice for period 6 and three lags");

    assert_eq!(outcome.summary().max_lag(), 3);
    assert!((1..=3).contains(&outcome.best_lag().lag()));
}
