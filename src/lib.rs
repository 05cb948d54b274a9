//! sector_causality — publication-volume vs. sector-return causality core.
//!
//! Purpose
//! -------
//! Implement the statistical core of a service that asks whether monthly
//! scientific-publication counts help predict monthly stock-market sector
//! returns. The crate consumes two pre-aligned monthly series and runs a
//! fixed pipeline: Augmented Dickey–Fuller stationarity checks,
//! first-differencing of non-stationary inputs, additive seasonal
//! decomposition (period 12), Granger causality over lags 1..K, best-lag
//! selection, and raw/lagged Pearson correlation.
//!
//! Key behaviors
//! -------------
//! - Expose the whole pipeline through [`pipeline::run_pipeline`],
//!   returning a [`pipeline::PipelineOutcome`] or a typed
//!   [`pipeline::PipelineError`].
//! - Expose each stage individually (`stationarity`, `decomposition`,
//!   `causality`, `correlation`) for callers that need finer control.
//! - Keep all I/O out of the crate: data fetching, HTTP, and narrative
//!   interpretation of [`causality::CausalitySummary`] belong to the
//!   surrounding service layer.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`series::MonthlySeries`] values are finite and timestamps strictly
//!   increasing; the constructors enforce this, so downstream numeric code
//!   never sees NaN or unordered data.
//! - Every stage fails fast with a module-local error enum; no stage
//!   substitutes default values for failed computations.
//! - No component retains state across invocations. Concurrent pipeline
//!   runs are safe as long as each call owns its input series.
//!
//! Conventions
//! -----------
//! - Significance is fixed at [`SIGNIFICANCE_LEVEL`] (α = 0.05) for both
//!   the stationarity verdict and the per-lag Granger flags.
//! - "Caused" always refers to the performance series and "cause" to the
//!   publication-count series, matching the predictive question the
//!   service asks.
//! - Reported correlations are rounded to three decimal digits at the
//!   pipeline boundary; internal computations keep full precision.
//!
//! Downstream usage
//! ----------------
//! - Typical callers construct two [`series::MonthlySeries`] values from
//!   already-merged API data and invoke:
//!
//!   ```rust
//!   use chrono::NaiveDate;
//!   use sector_causality::pipeline::{run_pipeline, PipelineOptions};
//!   use sector_causality::series::MonthlySeries;
//!
//!   # fn month(y: i32, m: u32) -> NaiveDate {
//!   #     NaiveDate::from_ymd_opt(y, m, 1).unwrap()
//!   # }
//!   # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let months: Vec<NaiveDate> =
//!       (0..36).map(|i| month(2020 + (i / 12) as i32, 1 + (i % 12) as u32)).collect();
//!   let perf: Vec<f64> = (0..36).map(|i| 0.01 * ((i * 7 + 3) % 11) as f64 - 0.04).collect();
//!   let pubs: Vec<f64> = (0..36).map(|i| 40.0 + ((i * 13 + 5) % 17) as f64).collect();
//!
//!   let performance = MonthlySeries::from_parts(months.clone(), perf)?;
//!   let publications = MonthlySeries::from_parts(months, pubs)?;
//!
//!   let outcome = run_pipeline(&performance, &publications, &PipelineOptions::default())?;
//!   assert_eq!(outcome.summary().max_lag(), 5);
//!   # Ok(())
//!   # }
//!   ```
//!
//! - With the `serde` feature enabled, outcome types derive `Serialize`
//!   so the service layer can shape them into JSON responses.
//!
//! Testing notes
//! -------------
//! - Each stage carries colocated unit tests; `tests/` drives the public
//!   pipeline end to end on deterministic fixtures, including the
//!   lead-by-two-months scenario the service is built around.

pub mod causality;
pub mod correlation;
pub mod decomposition;
pub mod pipeline;
pub mod regression;
pub mod series;
pub mod stationarity;

/// Significance threshold shared by the stationarity verdict and the
/// per-lag Granger flags. Fixed by the analysis design; not configurable.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;
