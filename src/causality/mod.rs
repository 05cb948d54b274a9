//! causality — Granger causality testing across a lag sweep.
//!
//! Purpose
//! -------
//! Answer the directional question at the heart of the pipeline: do
//! lagged publication counts help predict sector performance? The
//! public surface is [`granger_causality`], which returns a
//! [`CausalitySummary`] of per-lag F-tests for downstream lag
//! selection.
//!
//! Conventions
//! -----------
//! - The first argument is always the *caused* (predicted) series, the
//!   second the candidate *cause*.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use sector_causality::causality::{granger_causality, CausalitySummary, LagResult};
//!   ```

pub mod errors;
pub mod granger;
pub mod validation;

pub use errors::{GrangerError, GrangerResult};
pub use granger::{granger_causality, CausalitySummary, LagResult};
