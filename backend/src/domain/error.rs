//! Domain-level error types.
//!
//! These errors are transport agnostic. Callers map the [`ErrorCode`]
//! category to whatever status envelope they speak; the [`FailureReason`]
//! names the precise condition so callers can tell, for example, a missing
//! rating from empty review content.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with the current state.
    Conflict,
    /// A dependency failed or an unexpected error occurred.
    InternalError,
}

impl ErrorCode {
    /// Whether the failure was caused by the caller rather than the system.
    ///
    /// # Examples
    /// ```
    /// use reviews_backend::domain::ErrorCode;
    ///
    /// assert!(ErrorCode::InvalidRequest.is_client_fault());
    /// assert!(!ErrorCode::InternalError.is_client_fault());
    /// ```
    #[must_use]
    pub fn is_client_fault(self) -> bool {
        !matches!(self, Self::InternalError)
    }
}

/// Precise condition behind an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Review content was empty or too long.
    InvalidContent,
    /// The supplied rating value is outside the accepted range.
    InvalidRating,
    /// Neither a supplied nor a pre-existing rating backs the review.
    MissingRating,
    /// The author already reviewed this album.
    DuplicateReview,
    /// Offset or limit were missing or malformed.
    InvalidPageRequest,
    /// The requested page starts past the end of the collection.
    OffsetOutOfRange,
    /// The review has no comments.
    NoComments,
    /// The review does not exist for the album.
    ReviewNotFound,
    /// The album provider does not know the album.
    AlbumNotFound,
    /// The album provider failed.
    AlbumUnavailable,
    /// The review store failed while reading a review.
    ReviewUnavailable,
    /// A rating, review, or comment store failed.
    StoreUnavailable,
    /// The review could not be deleted.
    DeletionFailed,
}

impl FailureReason {
    /// Snake-case identifier matching the serialised form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidContent => "invalid_content",
            Self::InvalidRating => "invalid_rating",
            Self::MissingRating => "missing_rating",
            Self::DuplicateReview => "duplicate_review",
            Self::InvalidPageRequest => "invalid_page_request",
            Self::OffsetOutOfRange => "offset_out_of_range",
            Self::NoComments => "no_comments",
            Self::ReviewNotFound => "review_not_found",
            Self::AlbumNotFound => "album_not_found",
            Self::AlbumUnavailable => "album_unavailable",
            Self::ReviewUnavailable => "review_unavailable",
            Self::StoreUnavailable => "store_unavailable",
            Self::DeletionFailed => "deletion_failed",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
/// - `trace_id`, when present, must be non-empty.
///
/// # Examples
/// ```
/// use reviews_backend::domain::{Error, ErrorCode, FailureReason};
///
/// let err = Error::not_found("There are no comments for this review.")
///     .with_reason(FailureReason::NoComments);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.reason(), Some(FailureReason::NoComments));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    reason: Option<FailureReason>,
    details: Option<Value>,
    trace_id: Option<String>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    /// The message was empty or whitespace.
    EmptyMessage,
    /// The trace identifier was empty or whitespace.
    EmptyTraceId,
}

impl fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
            Self::EmptyTraceId => write!(f, "trace identifier must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if validation fails.
    ///
    /// Captures the current [`TraceId`] when one is in scope.
    ///
    /// # Panics
    /// Panics when `message` is empty or whitespace. Use [`Error::try_new`]
    /// for untrusted input.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            reason: None,
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        })
    }

    /// Stable machine-readable error category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message safe to show to the caller.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Precise failure condition, when one applies.
    pub fn reason(&self) -> Option<FailureReason> {
        self.reason
    }

    /// Supplementary error details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Correlation identifier captured at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Tag the error with its precise condition.
    pub fn with_reason(mut self, reason: FailureReason) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use reviews_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "limit" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a trace identifier, panicking on empty input.
    ///
    /// # Panics
    /// Panics when `trace_id` is empty or whitespace.
    pub fn with_trace_id(self, trace_id: impl Into<String>) -> Self {
        match self.try_with_trace_id(trace_id) {
            Ok(value) => value,
            Err(err) => panic!("trace identifiers must satisfy validation: {err}"),
        }
    }

    /// Fallible variant of [`Error::with_trace_id`].
    pub fn try_with_trace_id(
        mut self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let trace_id = trace_id.into();
        if trace_id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(trace_id);
        Ok(self)
    }

    /// Copy suitable for callers outside the trust boundary.
    ///
    /// Server faults lose their details; client faults are returned as-is.
    #[must_use]
    pub fn redacted(&self) -> Self {
        if self.code.is_client_fault() {
            return self.clone();
        }
        Self {
            details: None,
            ..self.clone()
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<FailureReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
            reason: value.reason,
            details: value.details,
            trace_id: value.trace_id,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            reason,
            details,
            trace_id,
        } = value;

        let mut error = Error::try_new(code, message)?;
        error.reason = reason;
        error.details = details;
        error.trace_id = None;
        match trace_id {
            Some(id) => error.try_with_trace_id(id),
            None => Ok(error),
        }
    }
}
