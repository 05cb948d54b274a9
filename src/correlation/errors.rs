//! Error handling for correlation and lag selection.
//!
//! Defines `CorrelationError` and the alias `CorrelationResult<T>` for
//! the Pearson and lagged-Pearson operations.

pub type CorrelationResult<T> = Result<T, CorrelationError>;

/// Error conditions raised while correlating two series.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// The two series have different lengths and cannot be paired.
    MisalignedLength { left: usize, right: usize },

    /// After applying the lag offset, too few overlapping pairs remain
    /// to define a correlation.
    InsufficientOverlap { available: usize, required: usize },

    /// One of the paired windows has zero variance, so the correlation
    /// is undefined.
    DegenerateSeries,
}

impl std::error::Error for CorrelationError {}

impl std::fmt::Display for CorrelationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationError::MisalignedLength { left, right } => write!(
                f,
                "Correlation Error: series lengths differ (left: {left}, right: {right})."
            ),
            CorrelationError::InsufficientOverlap { available, required } => write!(
                f,
                "Correlation Error: only {available} overlapping observations after \
                 lagging, need at least {required}."
            ),
            CorrelationError::DegenerateSeries => write!(
                f,
                "Correlation Error: a series has zero variance over the overlap; \
                 correlation is undefined."
            ),
        }
    }
}
