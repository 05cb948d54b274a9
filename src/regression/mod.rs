//! regression — shared ordinary-least-squares engine.
//!
//! Purpose
//! -------
//! House the one OLS implementation both statistical stages are built
//! on: the ADF unit-root regression (`stationarity`) and the
//! restricted/unrestricted model pair of the Granger F-test
//! (`causality`). Keeping it in one place guarantees the two tests share
//! identical numerics for fitting, residual sums, and standard errors.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use sector_causality::regression::{OlsFit, RegressionError, RegressionResult};
//!   ```

pub mod errors;
pub mod ols;

pub use errors::{RegressionError, RegressionResult};
pub use ols::OlsFit;
