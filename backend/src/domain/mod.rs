//! Domain primitives, ports, and services.
//!
//! Purpose: Define strongly typed review entities and the use cases that
//! operate on them. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic error payload.
//! - ErrorCode / FailureReason — stable error category and precise condition.
//! - AlbumId, UserId, ReviewId, CommentId — validated identifiers.
//! - Review, Rating, Comment — aggregates returned by the services.
//! - ReviewService / CommentService — implementations of the driving ports.

pub mod album;
pub mod comment;
pub mod comment_service;
pub mod error;
pub mod ports;
pub mod rating;
pub mod rating_gate;
pub mod review;
pub mod review_service;
pub mod trace_id;
pub mod user;

pub use self::album::{ALBUM_ID_MAX, AlbumData, AlbumId, AlbumValidationError};
pub use self::comment::{Comment, CommentId};
pub use self::comment_service::CommentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, FailureReason};
pub use self::rating::{
    Rating, RatingRequirement, RatingScale, RatingScaleError, RatingValidationError, RatingValue,
};
pub use self::rating_gate::{RatingGate, RatingGateError};
pub use self::review::{
    NewReview, Review, ReviewContent, ReviewId, ReviewValidationError, ReviewWithAlbum,
};
pub use self::review_service::ReviewService;
pub use self::trace_id::TraceId;
pub use self::user::{UserId, UserValidationError};

/// Convenient result alias for use-case calls.
///
/// # Examples
/// ```
/// use reviews_backend::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(Error::not_found("nothing here"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
