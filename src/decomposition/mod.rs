//! decomposition — additive seasonal adjustment of monthly series.
//!
//! Purpose
//! -------
//! Strip trend and seasonality from a monthly series so the causality
//! stages operate on the irregular component only. The single public
//! operation is [`seasonal_residual`].
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use sector_causality::decomposition::{seasonal_residual, DecompositionError};
//!   ```

pub mod errors;
pub mod seasonal;

pub use errors::{DecompositionError, DecompositionResult};
pub use seasonal::seasonal_residual;
