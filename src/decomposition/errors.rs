//! Error handling for seasonal decomposition.
//!
//! Defines `DecompositionError` and the alias `DecompositionResult<T>`
//! for the additive trend/seasonal/residual split.

pub type DecompositionResult<T> = Result<T, DecompositionError>;

/// Error conditions raised while decomposing a monthly series.
#[derive(Debug, Clone, PartialEq)]
pub enum DecompositionError {
    /// The seasonal period is too small to define a cycle.
    InvalidPeriod(usize),

    /// Fewer than two full seasonal periods of history are available;
    /// the seasonal component cannot be estimated.
    InsufficientHistory { len: usize, required: usize },
}

impl std::error::Error for DecompositionError {}

impl std::fmt::Display for DecompositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecompositionError::InvalidPeriod(period) => {
                write!(f, "Invalid seasonal period: {period}. Must be at least 2.")
            }
            DecompositionError::InsufficientHistory { len, required } => write!(
                f,
                "Decomposition requires at least {required} observations \
                 (two full seasonal periods), got {len}."
            ),
        }
    }
}
