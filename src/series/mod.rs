//! series — validated monthly time series shared by all pipeline stages.
//!
//! Purpose
//! -------
//! Define the crate's single series type, [`MonthlySeries`], together
//! with its construction/alignment error handling. Statistical stages
//! take `&[f64]` slices; this module owns the timestamp bookkeeping that
//! lets the orchestrator difference, decompose, and re-intersect series
//! without index arithmetic leaking into the numeric code.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use sector_causality::series::{MonthlySeries, SeriesError, SeriesResult};
//!   ```

pub mod errors;
pub mod monthly;

pub use errors::{SeriesError, SeriesResult};
pub use monthly::MonthlySeries;
