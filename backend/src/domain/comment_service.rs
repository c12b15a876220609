//! Comment paging service.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest, PaginationError, paginate_owned};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{CommentQuery, CommentRepository, PageCommentsRequest};
use crate::domain::{Comment, Error, FailureReason};

/// Comment service implementing [`CommentQuery`].
///
/// Comments are fetched in full and sliced in memory; the store has no
/// paging capability of its own.
pub struct CommentService<C> {
    comments: Arc<C>,
}

impl<C> Clone for CommentService<C> {
    fn clone(&self) -> Self {
        Self {
            comments: Arc::clone(&self.comments),
        }
    }
}

impl<C> CommentService<C> {
    /// Create a new service over the given comment store.
    pub fn new(comments: Arc<C>) -> Self {
        Self { comments }
    }
}

#[async_trait]
impl<C> CommentQuery for CommentService<C>
where
    C: CommentRepository,
{
    async fn page_comments(&self, request: PageCommentsRequest) -> Result<Page<Comment>, Error> {
        let PageCommentsRequest {
            review_id,
            offset,
            limit,
        } = request;
        debug!(%review_id, ?offset, ?limit, "paging comments");

        let page_request = PageRequest::from_raw(offset, limit).map_err(|err| {
            Error::invalid_request("Must send an offset and a limit with this request.")
                .with_reason(FailureReason::InvalidPageRequest)
                .with_details(json!({ "cause": err.to_string() }))
        })?;

        let comments = self
            .comments
            .find_all_by_review_id(&review_id)
            .await
            .map_err(|err| {
                error!(%review_id, error = %err, "comment store failed");
                Error::internal(
                    "An internal server error occurred while trying to retrieve the comments \
                     for this review. Please try again or contact a site contributor.",
                )
                .with_reason(FailureReason::StoreUnavailable)
            })?;

        if comments.is_empty() {
            return Err(Error::not_found("There are no comments for this review.")
                .with_reason(FailureReason::NoComments));
        }

        paginate_owned(comments, page_request).map_err(|err| match err {
            PaginationError::InvalidRange {
                offset,
                limit,
                total,
            } => Error::invalid_request(
                "The given offset is out of range for the total number of items.",
            )
            .with_reason(FailureReason::OffsetOutOfRange)
            .with_details(json!({ "offset": offset, "limit": limit, "total": total })),
        })
    }
}

#[cfg(test)]
#[path = "comment_service_tests.rs"]
mod tests;
