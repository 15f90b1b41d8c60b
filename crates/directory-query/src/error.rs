//! Error types for the query engine

use thiserror::Error;

/// Result type alias for query engine operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised when a presentation window is misconfigured
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Page size of zero
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// Incremental batch of zero
    #[error("incremental batch must be at least 1")]
    ZeroBatch,
}
