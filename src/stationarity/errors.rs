//! Error handling for the stationarity check.
//!
//! This module defines `StationarityError`, the error type for the
//! Augmented Dickey–Fuller routine and its input validation, and the
//! alias `StationarityResult<T>`. Regression-level failures bubble up via
//! a wrapping variant so the unit-root code composes with `?`.

use crate::regression::RegressionError;

pub type StationarityResult<T> = Result<T, StationarityError>;

/// Error conditions raised while running the ADF stationarity check.
#[derive(Debug, Clone, PartialEq)]
pub enum StationarityError {
    //------ Input validation ------
    /// Fewer observations than the documented minimum sample.
    InsufficientData { n_obs: usize, required: usize },

    /// A data element is NaN or infinite.
    InvalidData(f64),

    /// The series has zero variance; the unit-root regression is
    /// undefined on a constant series.
    DegenerateSeries,

    //------ Computation ------
    /// The unit-root regression itself failed (for example a collinear
    /// lag structure on near-constant data).
    Regression(RegressionError),
}

impl std::error::Error for StationarityError {}

impl From<RegressionError> for StationarityError {
    fn from(err: RegressionError) -> Self {
        StationarityError::Regression(err)
    }
}

impl std::fmt::Display for StationarityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationarityError::InsufficientData { n_obs, required } => write!(
                f,
                "Stationarity check needs at least {required} observations, got {n_obs}."
            ),
            StationarityError::InvalidData(value) => {
                write!(f, "Invalid data value: {value}. Must be a finite number.")
            }
            StationarityError::DegenerateSeries => {
                write!(f, "Series has zero variance; the ADF regression is undefined.")
            }
            StationarityError::Regression(err) => {
                write!(f, "ADF regression failed: {err}")
            }
        }
    }
}
