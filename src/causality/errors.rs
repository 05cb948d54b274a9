//! Error handling for Granger causality testing.
//!
//! Defines `GrangerError` and the alias `GrangerResult<T>` used by the
//! lag-sweep F-tests in [`crate::causality::granger`].

use crate::regression::RegressionError;

pub type GrangerResult<T> = Result<T, GrangerError>;

/// Error conditions raised while running the Granger lag sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum GrangerError {
    /// The requested maximum lag is zero.
    InvalidMaxLag,

    /// The two series have different lengths and cannot be paired.
    Alignment { caused: usize, cause: usize },

    /// A NaN or infinite observation was found in either series.
    InvalidData(f64),

    /// Too few paired observations to estimate the unrestricted model
    /// at the requested maximum lag.
    InsufficientData { n_obs: usize, required: usize },

    /// One of the series is constant, so its lags carry no information
    /// and every design matrix is singular.
    DegenerateSeries,

    /// A lag-specific regression failed despite the input guards.
    Regression(RegressionError),
}

impl std::error::Error for GrangerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrangerError::Regression(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GrangerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrangerError::InvalidMaxLag => {
                write!(f, "Granger Error: maximum lag must be at least 1.")
            }
            GrangerError::Alignment { caused, cause } => write!(
                f,
                "Granger Error: series lengths differ (caused: {caused}, cause: {cause})."
            ),
            GrangerError::InvalidData(value) => {
                write!(f, "Granger Error: non-finite observation {value} in input.")
            }
            GrangerError::InsufficientData { n_obs, required } => write!(
                f,
                "Granger Error: {n_obs} paired observations, need at least {required} \
                 for the requested maximum lag."
            ),
            GrangerError::DegenerateSeries => {
                write!(f, "Granger Error: input series is constant; lags are uninformative.")
            }
            GrangerError::Regression(err) => write!(f, "Granger Error: {err}"),
        }
    }
}

impl From<RegressionError> for GrangerError {
    fn from(err: RegressionError) -> Self {
        GrangerError::Regression(err)
    }
}
