//! Port for the external album catalogue.
//!
//! The provider is read-only from this crate's point of view: album data is
//! fetched for display next to a review and never written back.

use async_trait::async_trait;

use crate::domain::{AlbumData, AlbumId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by album data providers.
    pub enum AlbumDataProviderError {
        /// The provider could not be reached.
        Connection { message: String } =>
            "album provider connection failed: {message}",
        /// The provider answered with an error or an unreadable payload.
        Upstream { message: String } =>
            "album provider request failed: {message}",
        /// The provider does not know the album.
        NotFound { album_id: String } =>
            "album not found: {album_id}",
    }
}

/// Port for fetching album metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlbumDataProvider: Send + Sync {
    /// Fetch metadata for one album.
    ///
    /// Idempotent; repeated calls for the same id may hit a cache.
    async fn fetch_album(&self, album_id: &AlbumId) -> Result<AlbumData, AlbumDataProviderError>;
}

/// Fixture provider that knows every album under a placeholder title.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAlbumDataProvider;

/// Title reported by [`FixtureAlbumDataProvider`].
pub const FIXTURE_ALBUM_NAME: &str = "Untitled album";

#[async_trait]
impl AlbumDataProvider for FixtureAlbumDataProvider {
    async fn fetch_album(&self, album_id: &AlbumId) -> Result<AlbumData, AlbumDataProviderError> {
        Ok(AlbumData::new(album_id.clone(), FIXTURE_ALBUM_NAME))
    }
}
