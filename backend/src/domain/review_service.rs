//! Review workflow service.
//!
//! Implements [`ReviewQuery`] and [`ReviewCommand`] on top of the album
//! provider, the rating store (through [`RatingGate`]), and the review store.
//! Dependency failures surface as generic retry messages; adapter
//! diagnostics go to the log instead of the caller.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    AlbumDataProvider, AlbumDataProviderError, CreateReviewRequest, RateAlbumRequest,
    RatingRepository, ReviewCommand, ReviewQuery, ReviewRepository, ReviewRepositoryError,
};
use crate::domain::rating_gate::{RatingGate, RatingGateError};
use crate::domain::{
    AlbumData, AlbumId, Error, FailureReason, NewReview, Rating, RatingScale, RatingValue,
    Review, ReviewContent, ReviewId, ReviewWithAlbum,
};

const RETRY_HINT: &str = "Please try again or contact a site contributor.";

fn unavailable(prefix: &str, reason: FailureReason) -> Error {
    Error::internal(format!("{prefix} {RETRY_HINT}")).with_reason(reason)
}

/// Review service implementing the review driving ports.
pub struct ReviewService<A, R, V> {
    albums: Arc<A>,
    gate: RatingGate<R>,
    reviews: Arc<V>,
    rating_scale: RatingScale,
}

impl<A, R, V> Clone for ReviewService<A, R, V> {
    fn clone(&self) -> Self {
        Self {
            albums: Arc::clone(&self.albums),
            gate: self.gate.clone(),
            reviews: Arc::clone(&self.reviews),
            rating_scale: self.rating_scale,
        }
    }
}

impl<A, R, V> ReviewService<A, R, V> {
    /// Create a new service with the given ports and the default rating scale.
    pub fn new(albums: Arc<A>, ratings: Arc<R>, reviews: Arc<V>) -> Self {
        Self {
            albums,
            gate: RatingGate::new(ratings),
            reviews,
            rating_scale: RatingScale::DEFAULT,
        }
    }

    /// Accept ratings on `scale` instead of the default.
    #[must_use]
    pub fn with_rating_scale(mut self, scale: RatingScale) -> Self {
        self.rating_scale = scale;
        self
    }
}

impl<A, R, V> ReviewService<A, R, V>
where
    A: AlbumDataProvider,
    R: RatingRepository,
    V: ReviewRepository,
{
    fn map_album_error(album_id: &AlbumId, err: AlbumDataProviderError) -> Error {
        match err {
            AlbumDataProviderError::NotFound { .. } => {
                Error::not_found(format!("Album {album_id} does not exist."))
                    .with_reason(FailureReason::AlbumNotFound)
            }
            other => {
                error!(%album_id, error = %other, "album provider failed");
                unavailable(
                    "Could not retrieve album data due to an internal server error.",
                    FailureReason::AlbumUnavailable,
                )
            }
        }
    }

    fn map_lookup_error(review_id: &ReviewId, err: &ReviewRepositoryError) -> Error {
        error!(%review_id, error = %err, "review lookup failed");
        unavailable(
            "Could not retrieve review data due to an internal server error.",
            FailureReason::ReviewUnavailable,
        )
    }

    fn map_create_error(request: &NewReview, err: ReviewRepositoryError) -> Error {
        match err {
            ReviewRepositoryError::MissingRating { .. } => {
                warn!(
                    album_id = %request.album_id,
                    author_id = %request.author_id,
                    "rating vanished before the review was written"
                );
                Self::missing_rating()
            }
            ReviewRepositoryError::DuplicateReview { .. } => {
                warn!(
                    album_id = %request.album_id,
                    author_id = %request.author_id,
                    "duplicate review rejected"
                );
                Error::conflict("You have already reviewed this album.")
                    .with_reason(FailureReason::DuplicateReview)
            }
            other => {
                error!(
                    album_id = %request.album_id,
                    author_id = %request.author_id,
                    error = %other,
                    "review store failed during creation"
                );
                unavailable(
                    "An internal server error occurred while attempting to create this review.",
                    FailureReason::StoreUnavailable,
                )
            }
        }
    }

    fn map_gate_error(request: &NewReview, err: RatingGateError) -> Error {
        match err {
            RatingGateError::Conflict => {
                warn!(
                    album_id = %request.album_id,
                    author_id = %request.author_id,
                    "review without a rating rejected"
                );
                Self::missing_rating()
            }
            RatingGateError::StoreUnavailable(source) => {
                error!(
                    album_id = %request.album_id,
                    author_id = %request.author_id,
                    error = %source,
                    "rating lookup failed"
                );
                unavailable(
                    "An internal server error occurred while attempting to create this review.",
                    FailureReason::StoreUnavailable,
                )
            }
        }
    }

    fn missing_rating() -> Error {
        Error::invalid_request(
            "To write a review, a rating must be provided in the creation request or already \
             exist for this album by the user.",
        )
        .with_reason(FailureReason::MissingRating)
    }

    fn parse_rating(&self, raw: i64) -> Result<RatingValue, Error> {
        self.rating_scale.value(raw).map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_reason(FailureReason::InvalidRating)
                .with_details(json!({ "field": "rating", "value": raw }))
        })
    }

    fn parse_content(raw: String) -> Result<ReviewContent, Error> {
        ReviewContent::new(raw).map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_reason(FailureReason::InvalidContent)
                .with_details(json!({ "field": "content" }))
        })
    }

    async fn fetch_album(&self, album_id: &AlbumId) -> Result<AlbumData, Error> {
        self.albums
            .fetch_album(album_id)
            .await
            .map_err(|err| Self::map_album_error(album_id, err))
    }

    async fn fetch_review(&self, album_id: &AlbumId, review_id: &ReviewId) -> Result<Review, Error> {
        let found = self
            .reviews
            .find_by_id(review_id)
            .await
            .map_err(|err| Self::map_lookup_error(review_id, &err))?;
        found
            .filter(|review| &review.album_id == album_id)
            .ok_or_else(|| {
                Error::not_found(format!("Review {review_id} does not exist for this album."))
                    .with_reason(FailureReason::ReviewNotFound)
            })
    }
}

#[async_trait]
impl<A, R, V> ReviewQuery for ReviewService<A, R, V>
where
    A: AlbumDataProvider,
    R: RatingRepository,
    V: ReviewRepository,
{
    async fn get_review(
        &self,
        album_id: &AlbumId,
        review_id: &ReviewId,
    ) -> Result<ReviewWithAlbum, Error> {
        debug!(%album_id, %review_id, "fetching review");
        let (album, review) = tokio::join!(
            self.fetch_album(album_id),
            self.fetch_review(album_id, review_id)
        );
        Ok(ReviewWithAlbum {
            album_data: album?,
            review: review?,
        })
    }
}

#[async_trait]
impl<A, R, V> ReviewCommand for ReviewService<A, R, V>
where
    A: AlbumDataProvider,
    R: RatingRepository,
    V: ReviewRepository,
{
    async fn create_review(&self, request: CreateReviewRequest) -> Result<Review, Error> {
        let CreateReviewRequest {
            author_id,
            album_id,
            content,
            rating,
        } = request;
        debug!(%album_id, %author_id, rating_supplied = rating.is_some(), "creating review");

        let content = Self::parse_content(content)?;
        let supplied = rating.map(|raw| self.parse_rating(raw)).transpose()?;
        let new_review = NewReview {
            album_id,
            author_id,
            content,
        };

        let requirement = self
            .gate
            .ensure_rating_for(&new_review.album_id, &new_review.author_id, supplied)
            .await
            .map_err(|err| Self::map_gate_error(&new_review, err))?;

        let review = self
            .reviews
            .create(&new_review, requirement)
            .await
            .map_err(|err| Self::map_create_error(&new_review, err))?;

        info!(
            review_id = %review.id,
            album_id = %review.album_id,
            author_id = %review.author_id,
            "review created"
        );
        Ok(review)
    }

    async fn delete_review(&self, review_id: &ReviewId) -> Result<(), Error> {
        debug!(%review_id, "deleting review");
        let outcome = self.reviews.delete(review_id).await;
        match outcome {
            Ok(true) => {
                info!(%review_id, "review deleted");
                Ok(())
            }
            Ok(false) => {
                error!(%review_id, "review store reported nothing deleted");
                Err(unavailable(
                    "An internal server error occurred trying to delete this review.",
                    FailureReason::DeletionFailed,
                ))
            }
            Err(err) => {
                error!(%review_id, error = %err, "review store failed during deletion");
                Err(unavailable(
                    "An internal server error occurred trying to delete this review.",
                    FailureReason::DeletionFailed,
                ))
            }
        }
    }

    async fn rate_album(&self, request: RateAlbumRequest) -> Result<Rating, Error> {
        let RateAlbumRequest {
            rater_id,
            album_id,
            value,
        } = request;
        debug!(%album_id, %rater_id, "rating album");

        let value = self.parse_rating(value)?;
        let rating = self
            .gate
            .record(&album_id, &rater_id, value)
            .await
            .map_err(|err| {
                error!(%album_id, %rater_id, error = %err, "rating store failed");
                unavailable(
                    "An internal server error occurred while attempting to save this rating.",
                    FailureReason::StoreUnavailable,
                )
            })?;

        info!(%album_id, %rater_id, value = %rating.value, "album rated");
        Ok(rating)
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
