//! Driving port for paging through review comments.

use async_trait::async_trait;
use pagination::Page;
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, Error, ReviewId};

/// Request for one page of comments.
///
/// `offset` and `limit` are passed through as received so the service can
/// report missing or malformed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCommentsRequest {
    /// Review whose comments are paged.
    pub review_id: ReviewId,
    /// Zero-based page index.
    pub offset: Option<i64>,
    /// Page size.
    pub limit: Option<i64>,
}

/// Domain use-case port for comment pages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Fetch one page of a review's comments in insertion order.
    ///
    /// # Errors
    ///
    /// - `InvalidPageRequest` for missing or malformed offset/limit.
    /// - `StoreUnavailable` when the comment store fails.
    /// - `NoComments` when the review has no comments.
    /// - `OffsetOutOfRange` when the page starts past the last comment.
    async fn page_comments(&self, request: PageCommentsRequest) -> Result<Page<Comment>, Error>;
}
