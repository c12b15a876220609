//! Port for review persistence.
//!
//! Review creation is a single conditional write: the adapter checks the
//! [`RatingRequirement`] and writes the rating (when supplied) and the review
//! atomically, so no concurrent request can slip between the rating check
//! and the review insert.

use async_trait::async_trait;

use crate::domain::{NewReview, RatingRequirement, Review, ReviewId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by review repository adapters.
    pub enum ReviewRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "review repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "review repository query failed: {message}",
        /// The rating required by the write did not exist.
        MissingRating { album_id: String, user_id: String } =>
            "no rating by {user_id} for album {album_id}",
        /// The author already reviewed the album.
        DuplicateReview { album_id: String, user_id: String } =>
            "{user_id} already reviewed album {album_id}",
    }
}

/// Port for review storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fetch a review by identifier.
    ///
    /// Returns `None` if no review exists with the given id.
    async fn find_by_id(&self, review_id: &ReviewId)
    -> Result<Option<Review>, ReviewRepositoryError>;

    /// Persist a review under the given rating requirement.
    ///
    /// # Atomicity
    ///
    /// - [`RatingRequirement::Existing`]: fails with
    ///   [`ReviewRepositoryError::MissingRating`] unless a rating for the
    ///   (album, author) pair exists at write time.
    /// - [`RatingRequirement::Upsert`]: writes the rating and the review in
    ///   one operation; the returned review embeds the value.
    ///
    /// Either way, a second review for the same pair fails with
    /// [`ReviewRepositoryError::DuplicateReview`] and writes nothing.
    async fn create(
        &self,
        review: &NewReview,
        requirement: RatingRequirement,
    ) -> Result<Review, ReviewRepositoryError>;

    /// Delete a review and the comments attached to it.
    ///
    /// Returns `Ok(true)` if the review was deleted, `Ok(false)` if it didn't
    /// exist.
    async fn delete(&self, review_id: &ReviewId) -> Result<bool, ReviewRepositoryError>;
}

/// Fixture repository that stores nothing.
///
/// Lookups return `None`, creations echo the input with a fresh id, and
/// deletions report that nothing was removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewRepository;

#[async_trait]
impl ReviewRepository for FixtureReviewRepository {
    async fn find_by_id(
        &self,
        _review_id: &ReviewId,
    ) -> Result<Option<Review>, ReviewRepositoryError> {
        Ok(None)
    }

    async fn create(
        &self,
        review: &NewReview,
        requirement: RatingRequirement,
    ) -> Result<Review, ReviewRepositoryError> {
        Ok(review.clone().into_review(
            ReviewId::random(),
            requirement.supplied_value(),
            chrono::Utc::now(),
        ))
    }

    async fn delete(&self, _review_id: &ReviewId) -> Result<bool, ReviewRepositoryError> {
        Ok(false)
    }
}
