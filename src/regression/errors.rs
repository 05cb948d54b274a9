//! Error handling for ordinary-least-squares fitting.
//!
//! This module defines `RegressionError`, the error type for the shared
//! OLS engine used by the ADF stationarity test and the Granger engine,
//! and the alias `RegressionResult<T>`.

pub type RegressionResult<T> = Result<T, RegressionError>;

/// Error conditions raised while fitting an OLS model.
///
/// All variants indicate that the requested regression is ill-posed for
/// the supplied design matrix; callers translate them into their own
/// domain errors (degenerate series, insufficient observations).
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// The design matrix has no rows or no columns.
    EmptyDesign,

    /// Response length does not match the design row count.
    ShapeMismatch { rows: usize, responses: usize },

    /// Fewer observations than parameters; no residual degrees of freedom.
    InsufficientObservations { n_obs: usize, n_params: usize },

    /// XᵀX is singular (collinear or constant regressors).
    SingularDesign,
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegressionError::EmptyDesign => {
                write!(f, "Regression Error: design matrix has no rows or columns")
            }
            RegressionError::ShapeMismatch { rows, responses } => write!(
                f,
                "Regression Error: design has {rows} rows but response has {responses} entries"
            ),
            RegressionError::InsufficientObservations { n_obs, n_params } => write!(
                f,
                "Regression Error: {n_obs} observations cannot identify {n_params} parameters"
            ),
            RegressionError::SingularDesign => {
                write!(f, "Regression Error: design matrix is singular (collinear regressors)")
            }
        }
    }
}
