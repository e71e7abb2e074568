//! # Ordering Errors

use thiserror::Error;

/// Result type for ordering operations
pub type OrderingResult<T> = Result<T, OrderingError>;

/// Ordering errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderingError {
    /// A persisted comparator name did not resolve to a known strategy.
    /// Configuration error; there is no implicit default.
    #[error("Unknown string comparator: {0}")]
    UnknownComparator(String),

    /// The natural comparator was asked to compare text values. The caller
    /// should have dispatched on the column's native type; this is a caller
    /// bug, not a data error, and is raised as a panic rather than returned.
    #[error("compare is not supported by the natural comparator; dispatch on the column's native type")]
    NaturalCompareUnsupported,
}
