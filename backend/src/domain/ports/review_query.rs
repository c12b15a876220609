//! Driving port for review reads.
//!
//! Inbound adapters use this port to fetch a review together with the album
//! it belongs to, without importing outbound concerns.

use async_trait::async_trait;

use crate::domain::{AlbumId, Error, ReviewId, ReviewWithAlbum};

/// Domain use-case port for fetching a review.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Fetch the review and its album data.
    ///
    /// # Errors
    ///
    /// - `AlbumNotFound` / `AlbumUnavailable` when the album provider fails.
    /// - `ReviewNotFound` when the review does not exist for the album.
    /// - `ReviewUnavailable` when the review store fails.
    async fn get_review(
        &self,
        album_id: &AlbumId,
        review_id: &ReviewId,
    ) -> Result<ReviewWithAlbum, Error>;
}
