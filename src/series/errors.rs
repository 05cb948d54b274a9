//! Error handling for monthly time-series construction and alignment.
//!
//! This module defines `SeriesError`, the error type shared by
//! [`MonthlySeries`](crate::series::MonthlySeries) constructors and by the
//! paired-series alignment guards used before causality and correlation
//! computations. An alias `SeriesResult<T>` standardizes the return type
//! across series code.

pub type SeriesResult<T> = Result<T, SeriesError>;

/// Error conditions raised while building or aligning monthly series.
///
/// Construction failures (`Empty`, `LengthMismatch`, `OutOfOrderTimestamp`,
/// `NonFiniteValue`) indicate malformed caller input; alignment failures
/// (`MisalignedLength`, `TimestampMismatch`) indicate that two series
/// handed to a paired operation were not intersected on common months
/// first, which is a caller error rather than something the core truncates
/// silently.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    //------ Construction ------
    /// No observations were supplied.
    Empty,

    /// Timestamp and value vectors differ in length.
    LengthMismatch { timestamps: usize, values: usize },

    /// A timestamp is not strictly greater than its predecessor.
    OutOfOrderTimestamp { index: usize },

    /// A value is NaN or infinite.
    NonFiniteValue { index: usize, value: f64 },

    /// The operation needs more observations than the series holds.
    TooShort { len: usize, required: usize },

    //------ Pairwise alignment ------
    /// Two series passed to a paired operation differ in length.
    MisalignedLength { left: usize, right: usize },

    /// Two equal-length series disagree on a timestamp.
    TimestampMismatch { index: usize },
}

impl std::error::Error for SeriesError {}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::Empty => {
                write!(f, "Series must contain at least one observation.")
            }
            SeriesError::LengthMismatch { timestamps, values } => write!(
                f,
                "Timestamp count ({timestamps}) does not match value count ({values})."
            ),
            SeriesError::OutOfOrderTimestamp { index } => write!(
                f,
                "Timestamp at index {index} is not strictly after its predecessor."
            ),
            SeriesError::NonFiniteValue { index, value } => {
                write!(f, "Value {value} at index {index} is not finite.")
            }
            SeriesError::TooShort { len, required } => write!(
                f,
                "Series has {len} observations but the operation requires at least {required}."
            ),
            SeriesError::MisalignedLength { left, right } => write!(
                f,
                "Paired series differ in length ({left} vs {right}); intersect them first."
            ),
            SeriesError::TimestampMismatch { index } => write!(
                f,
                "Paired series disagree on the timestamp at index {index}; intersect them first."
            ),
        }
    }
}
