//! Driving port for review and rating mutations.
//!
//! The [`ReviewCommand`] trait is the inbound contract for writing reviews.
//! Raw caller input (content text, integer rating) travels in the request and
//! is validated by the implementation before any store access.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{AlbumId, Error, Rating, Review, ReviewId, UserId};

/// Request to create a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Author of the review, supplied by the caller's auth layer.
    pub author_id: UserId,
    /// Album being reviewed.
    pub album_id: AlbumId,
    /// Review text, unvalidated.
    pub content: String,
    /// Rating to create alongside the review.
    ///
    /// - `None` requires a pre-existing rating by the author.
    /// - `Some(n)` writes the rating atomically with the review.
    pub rating: Option<i64>,
}

/// Request to rate an album without reviewing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateAlbumRequest {
    /// User giving the rating.
    pub rater_id: UserId,
    /// Album being rated.
    pub album_id: AlbumId,
    /// Score, unvalidated.
    pub value: i64,
}

/// Driving port for review mutations.
///
/// # Rating coupling
///
/// A review exists only when a rating by the same user for the same album
/// exists, or is written in the same operation as the review.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewCommand: Send + Sync {
    /// Create a review, writing the supplied rating with it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The content is blank or too long (`InvalidContent`).
    /// - The rating is out of range (`InvalidRating`).
    /// - No rating was supplied and none exists (`MissingRating`).
    /// - The author already reviewed the album (`DuplicateReview`).
    /// - A store failed (`StoreUnavailable`).
    async fn create_review(&self, request: CreateReviewRequest) -> Result<Review, Error>;

    /// Delete a review.
    ///
    /// A missing review and a store failure are both `DeletionFailed`.
    async fn delete_review(&self, review_id: &ReviewId) -> Result<(), Error>;

    /// Create or replace the caller's rating for an album.
    async fn rate_album(&self, request: RateAlbumRequest) -> Result<Rating, Error>;
}
