//! correlation — Pearson strength measures and reporting-lag selection.
//!
//! Purpose
//! -------
//! Quantify the relationship the causality stage tests for. Provides
//! [`pearson`] and the predictive [`lagged_pearson`], plus
//! [`select_best_lag`] which turns a Granger sweep into the single lag
//! the pipeline reports at.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use sector_causality::correlation::{lagged_pearson, select_best_lag, LagSelection};
//!   ```

pub mod errors;
pub mod pearson;
pub mod selection;

pub use errors::{CorrelationError, CorrelationResult};
pub use pearson::{lagged_pearson, pearson};
pub use selection::{select_best_lag, LagSelection, DEFAULT_LAG};
