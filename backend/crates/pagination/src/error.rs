//! Error types for request validation and page slicing.

use thiserror::Error;

/// Validation failures for caller supplied `offset`/`limit` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The request did not include an offset.
    #[error("an offset is required")]
    MissingOffset,
    /// The request did not include a limit.
    #[error("a limit is required")]
    MissingLimit,
    /// The offset was below zero.
    #[error("offset must be a non-negative integer, got {offset}")]
    NegativeOffset {
        /// Offset supplied by the caller.
        offset: i64,
    },
    /// The limit was zero or below.
    #[error("limit must be a positive integer, got {limit}")]
    NonPositiveLimit {
        /// Limit supplied by the caller.
        limit: i64,
    },
    /// The offset does not fit the platform index type.
    #[error("offset {offset} is too large")]
    OffsetTooLarge {
        /// Offset supplied by the caller.
        offset: i64,
    },
    /// The limit does not fit the platform index type.
    #[error("limit {limit} is too large")]
    LimitTooLarge {
        /// Limit supplied by the caller.
        limit: i64,
    },
}

/// Failures raised while slicing a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The requested page starts past the end of the collection.
    #[error("offset {offset} with limit {limit} is out of range for {total} items")]
    InvalidRange {
        /// Requested page offset.
        offset: usize,
        /// Requested page size.
        limit: usize,
        /// Number of items in the source collection.
        total: usize,
    },
}
