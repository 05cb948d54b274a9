//! Error handling for the end-to-end analysis pipeline.
//!
//! Defines `PipelineError`, which wraps each stage's error type so the
//! orchestrator can propagate failures with `?` while callers still see
//! which stage failed.

use crate::causality::GrangerError;
use crate::correlation::CorrelationError;
use crate::decomposition::DecompositionError;
use crate::series::SeriesError;
use crate::stationarity::StationarityError;

pub type PipelineResult<T> = Result<T, PipelineError>;

/// A failure in one stage of the analysis pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Input validation or re-alignment between stages failed.
    Alignment(SeriesError),

    /// The stationarity check failed on one of the inputs.
    Stationarity(StationarityError),

    /// Seasonal decomposition failed on one of the inputs.
    Decomposition(DecompositionError),

    /// The Granger lag sweep failed.
    Causality(GrangerError),

    /// A correlation stage failed.
    Correlation(CorrelationError),
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Alignment(err) => Some(err),
            PipelineError::Stationarity(err) => Some(err),
            PipelineError::Decomposition(err) => Some(err),
            PipelineError::Causality(err) => Some(err),
            PipelineError::Correlation(err) => Some(err),
        }
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Alignment(err) => write!(f, "Pipeline Error: {err}"),
            PipelineError::Stationarity(err) => write!(f, "Pipeline Error: {err}"),
            PipelineError::Decomposition(err) => write!(f, "Pipeline Error: {err}"),
            PipelineError::Causality(err) => write!(f, "Pipeline Error: {err}"),
            PipelineError::Correlation(err) => write!(f, "Pipeline Error: {err}"),
        }
    }
}

impl From<SeriesError> for PipelineError {
    fn from(err: SeriesError) -> Self {
        PipelineError::Alignment(err)
    }
}

impl From<StationarityError> for PipelineError {
    fn from(err: StationarityError) -> Self {
        PipelineError::Stationarity(err)
    }
}

impl From<DecompositionError> for PipelineError {
    fn from(err: DecompositionError) -> Self {
        PipelineError::Decomposition(err)
    }
}

impl From<GrangerError> for PipelineError {
    fn from(err: GrangerError) -> Self {
        PipelineError::Causality(err)
    }
}

impl From<CorrelationError> for PipelineError {
    fn from(err: CorrelationError) -> Self {
        PipelineError::Correlation(err)
    }
}
