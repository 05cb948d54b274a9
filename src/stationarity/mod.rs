//! stationarity — Augmented Dickey–Fuller check with MacKinnon p-values.
//!
//! Purpose
//! -------
//! Decide, per input series, whether first-differencing is required
//! before causality testing. The public surface is
//! [`StationarityVerdict::augmented_dickey_fuller`], which bundles the
//! ADF t-statistic, its approximate p-value, the AIC-selected
//! augmentation order, and the boolean verdict the pipeline acts on.
//!
//! Conventions
//! -----------
//! - The regression is constant-only (no deterministic trend term),
//!   matching the analysis this crate reimplements.
//! - Input guards live in [`validation`]; the documented minimum sample
//!   is [`validation::MIN_OBSERVATIONS`] dense observations.
//!
//! Downstream usage
//! ----------------
//! - Typical imports:
//!
//!   ```rust
//!   use sector_causality::stationarity::{StationarityVerdict, StationarityResult};
//!   ```

pub mod adf;
pub mod errors;
pub mod mackinnon;
pub mod validation;

pub use adf::StationarityVerdict;
pub use errors::{StationarityError, StationarityResult};
pub use mackinnon::mackinnon_p_value;
