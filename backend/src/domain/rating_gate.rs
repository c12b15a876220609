//! Rating/review coupling check.
//!
//! [`RatingGate`] decides which rating condition a review write must satisfy.
//! It never writes on the review path: the returned [`RatingRequirement`] is
//! handed to [`ReviewRepository::create`](crate::domain::ports::ReviewRepository::create),
//! which re-asserts it inside the same atomic write. The gate's read is a
//! fast pre-check that lets obviously invalid requests fail early.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{RatingRepository, RatingRepositoryError};
use crate::domain::{AlbumId, Rating, RatingRequirement, RatingValue, UserId};

/// Reasons the gate refused a review.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingGateError {
    /// No rating was supplied and none exists for the pair.
    #[error("review requires a rating to be supplied or pre-existing")]
    Conflict,
    /// The rating store could not answer.
    #[error("rating store unavailable: {0}")]
    StoreUnavailable(#[source] RatingRepositoryError),
}

/// Enforces that every review is backed by a rating from the same user.
pub struct RatingGate<R> {
    ratings: Arc<R>,
}

impl<R> Clone for RatingGate<R> {
    fn clone(&self) -> Self {
        Self {
            ratings: Arc::clone(&self.ratings),
        }
    }
}

impl<R> RatingGate<R> {
    /// Create a gate over the given rating store.
    pub fn new(ratings: Arc<R>) -> Self {
        Self { ratings }
    }
}

impl<R> RatingGate<R>
where
    R: RatingRepository,
{
    /// Work out the rating condition for a review by `user_id` on `album_id`.
    ///
    /// A supplied value always passes and yields
    /// [`RatingRequirement::Upsert`]; the store is not consulted. Without a
    /// value, the rating must already exist.
    ///
    /// # Errors
    ///
    /// - [`RatingGateError::Conflict`] when no value was supplied and the
    ///   user has not rated the album.
    /// - [`RatingGateError::StoreUnavailable`] when the existence check fails.
    pub async fn ensure_rating_for(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
        supplied: Option<RatingValue>,
    ) -> Result<RatingRequirement, RatingGateError> {
        if let Some(value) = supplied {
            return Ok(RatingRequirement::Upsert(value));
        }

        let exists = self
            .ratings
            .exists(album_id, user_id)
            .await
            .map_err(RatingGateError::StoreUnavailable)?;
        debug!(%album_id, %user_id, exists, "checked for existing rating");

        if exists {
            Ok(RatingRequirement::Existing)
        } else {
            Err(RatingGateError::Conflict)
        }
    }

    /// Write a standalone rating, replacing any earlier value for the pair.
    ///
    /// # Errors
    ///
    /// [`RatingGateError::StoreUnavailable`] when the write fails.
    pub async fn record(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
        value: RatingValue,
    ) -> Result<Rating, RatingGateError> {
        self.ratings
            .create(album_id, user_id, value)
            .await
            .map_err(RatingGateError::StoreUnavailable)
    }
}
