//! Ratings, reviews, and comments held behind one lock.
//!
//! A single mutex guards all three collections so the conditional review
//! write can check the rating, check for an earlier review, and insert
//! without another request interleaving.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, RatingRepository, RatingRepositoryError,
    ReviewRepository, ReviewRepositoryError,
};
use crate::domain::{
    AlbumId, Comment, NewReview, Rating, RatingRequirement, RatingValue, Review, ReviewId, UserId,
};

#[derive(Debug, Default)]
struct State {
    ratings: HashMap<(AlbumId, UserId), RatingValue>,
    reviews: Vec<Review>,
    comments: Vec<Comment>,
}

struct Poisoned;

impl From<Poisoned> for RatingRepositoryError {
    fn from(_: Poisoned) -> Self {
        Self::connection("review store lock poisoned")
    }
}

impl From<Poisoned> for ReviewRepositoryError {
    fn from(_: Poisoned) -> Self {
        Self::connection("review store lock poisoned")
    }
}

impl From<Poisoned> for CommentRepositoryError {
    fn from(_: Poisoned) -> Self {
        Self::connection("review store lock poisoned")
    }
}

/// In-memory implementation of the rating, review, and comment ports.
///
/// Review timestamps come from the injected [`Clock`].
pub struct InMemoryReviewStore {
    state: Mutex<State>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryReviewStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl InMemoryReviewStore {
    /// Create an empty store stamping reviews with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(State::default()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, Poisoned> {
        self.state.lock().map_err(|_| Poisoned)
    }

    /// Store a rating as-is, replacing any earlier value for the pair.
    ///
    /// # Errors
    /// Returns [`RatingRepositoryError::Connection`] if the lock was poisoned.
    pub fn seed_rating(&self, rating: Rating) -> Result<(), RatingRepositoryError> {
        let mut state = self.lock()?;
        state
            .ratings
            .insert((rating.album_id, rating.rater_id), rating.value);
        Ok(())
    }

    /// Remove a rating, returning whether one existed.
    ///
    /// # Errors
    /// Returns [`RatingRepositoryError::Connection`] if the lock was poisoned.
    #[cfg(any(test, feature = "test-support"))]
    pub fn remove_rating(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
    ) -> Result<bool, RatingRepositoryError> {
        let mut state = self.lock()?;
        Ok(state
            .ratings
            .remove(&(album_id.clone(), user_id.clone()))
            .is_some())
    }

    /// Store a review with its existing id and timestamp.
    ///
    /// Seeded reviews bypass the rating check; callers validate fixtures
    /// before seeding.
    ///
    /// # Errors
    /// Returns [`ReviewRepositoryError::Connection`] if the lock was poisoned.
    pub fn seed_review(&self, review: Review) -> Result<(), ReviewRepositoryError> {
        self.lock()?.reviews.push(review);
        Ok(())
    }

    /// Append a comment.
    ///
    /// # Errors
    /// Returns [`CommentRepositoryError::Connection`] if the lock was poisoned.
    pub fn seed_comment(&self, comment: Comment) -> Result<(), CommentRepositoryError> {
        self.lock()?.comments.push(comment);
        Ok(())
    }

    /// Number of reviews by `author_id` for `album_id`.
    ///
    /// # Errors
    /// Returns [`ReviewRepositoryError::Connection`] if the lock was poisoned.
    #[cfg(any(test, feature = "test-support"))]
    pub fn review_count_for(
        &self,
        album_id: &AlbumId,
        author_id: &UserId,
    ) -> Result<usize, ReviewRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .reviews
            .iter()
            .filter(|review| &review.album_id == album_id && &review.author_id == author_id)
            .count())
    }
}

#[async_trait]
impl RatingRepository for InMemoryReviewStore {
    async fn exists(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
    ) -> Result<bool, RatingRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .ratings
            .contains_key(&(album_id.clone(), user_id.clone())))
    }

    async fn create(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
        value: RatingValue,
    ) -> Result<Rating, RatingRepositoryError> {
        let mut state = self.lock()?;
        state
            .ratings
            .insert((album_id.clone(), user_id.clone()), value);
        Ok(Rating {
            album_id: album_id.clone(),
            rater_id: user_id.clone(),
            value,
        })
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewStore {
    async fn find_by_id(
        &self,
        review_id: &ReviewId,
    ) -> Result<Option<Review>, ReviewRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .reviews
            .iter()
            .find(|review| &review.id == review_id)
            .cloned())
    }

    async fn create(
        &self,
        review: &NewReview,
        requirement: RatingRequirement,
    ) -> Result<Review, ReviewRepositoryError> {
        let mut state = self.lock()?;
        let key = (review.album_id.clone(), review.author_id.clone());

        let duplicate = state
            .reviews
            .iter()
            .any(|existing| existing.album_id == key.0 && existing.author_id == key.1);
        if duplicate {
            return Err(ReviewRepositoryError::duplicate_review(
                key.0.to_string(),
                key.1.to_string(),
            ));
        }

        match requirement {
            RatingRequirement::Existing if !state.ratings.contains_key(&key) => {
                return Err(ReviewRepositoryError::missing_rating(
                    key.0.to_string(),
                    key.1.to_string(),
                ));
            }
            RatingRequirement::Existing => {}
            RatingRequirement::Upsert(value) => {
                state.ratings.insert(key, value);
            }
        }

        let stored = review.clone().into_review(
            ReviewId::random(),
            requirement.supplied_value(),
            self.clock.utc(),
        );
        state.reviews.push(stored.clone());
        debug!(review_id = %stored.id, "review stored");
        Ok(stored)
    }

    async fn delete(&self, review_id: &ReviewId) -> Result<bool, ReviewRepositoryError> {
        let mut state = self.lock()?;
        let before = state.reviews.len();
        state.reviews.retain(|review| &review.id != review_id);
        if state.reviews.len() == before {
            return Ok(false);
        }
        state
            .comments
            .retain(|comment| &comment.review_id != review_id);
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryReviewStore {
    async fn find_all_by_review_id(
        &self,
        review_id: &ReviewId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .comments
            .iter()
            .filter(|comment| &comment.review_id == review_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[path = "review_store_tests.rs"]
mod tests;
