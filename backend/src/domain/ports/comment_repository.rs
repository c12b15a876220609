//! Port for reading review comments.

use async_trait::async_trait;

use crate::domain::{Comment, ReviewId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "comment repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "comment repository query failed: {message}",
    }
}

/// Port for comment retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fetch every comment on a review in insertion order.
    ///
    /// Returns an empty vector when the review has no comments or does not
    /// exist.
    async fn find_all_by_review_id(
        &self,
        review_id: &ReviewId,
    ) -> Result<Vec<Comment>, CommentRepositoryError>;
}

/// Fixture repository with no comments.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCommentRepository;

#[async_trait]
impl CommentRepository for FixtureCommentRepository {
    async fn find_all_by_review_id(
        &self,
        _review_id: &ReviewId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_repository_returns_no_comments() {
        let comments = FixtureCommentRepository
            .find_all_by_review_id(&ReviewId::random())
            .await
            .expect("fixture lookup should succeed");
        assert!(comments.is_empty());
    }
}
