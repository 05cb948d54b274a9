//! stationarity::validation — input guards for the ADF check.
//!
//! Purpose
//! -------
//! Centralize the preconditions of the Augmented Dickey–Fuller routine:
//! a documented minimum sample, finite values, and non-zero variance.
//! Running the regression below the minimum sample would surface an
//! opaque linear-algebra failure; failing here keeps the error
//! domain-phrased.
//!
//! Conventions
//! -----------
//! - This module only validates; it performs no numeric work beyond a
//!   constant-series scan.
//! - The caller is responsible for dropping missing values before the
//!   check; the slice handed in must already be dense.

use crate::stationarity::errors::{StationarityError, StationarityResult};

/// Minimum number of observations accepted by the ADF check. Twelve
/// points — one full seasonal period — is the documented floor below
/// which the lag-augmented regression has too few residual degrees of
/// freedom to be meaningful.
pub const MIN_OBSERVATIONS: usize = 12;

/// Validate basic input constraints for the ADF stationarity check.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Dense series of observations, missing values already dropped.
///
/// Returns
/// -------
/// `StationarityResult<()>`
///   `Ok(())` when the series is long enough, finite, and non-constant.
///
/// Errors
/// ------
/// - `StationarityError::InsufficientData` when
///   `data.len() < MIN_OBSERVATIONS`.
/// - `StationarityError::InvalidData(value)` for the first non-finite
///   element.
/// - `StationarityError::DegenerateSeries` when every element equals the
///   first (zero variance).
pub fn validate_input(data: &[f64]) -> StationarityResult<()> {
    if data.len() < MIN_OBSERVATIONS {
        return Err(StationarityError::InsufficientData {
            n_obs: data.len(),
            required: MIN_OBSERVATIONS,
        });
    }

    for &value in data {
        if !value.is_finite() {
            return Err(StationarityError::InvalidData(value));
        }
    }

    if data.iter().all(|&v| v == data[0]) {
        return Err(StationarityError::DegenerateSeries);
    }

    Ok(())
}
