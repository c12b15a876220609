//! Album provider backed by a map of known albums.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{AlbumDataProvider, AlbumDataProviderError};
use crate::domain::{AlbumData, AlbumId};

/// In-memory [`AlbumDataProvider`].
///
/// Unknown albums are reported as [`AlbumDataProviderError::NotFound`].
#[derive(Debug, Default)]
pub struct InMemoryAlbumCatalogue {
    albums: RwLock<HashMap<AlbumId, AlbumData>>,
}

impl InMemoryAlbumCatalogue {
    /// Create a catalogue holding `albums`.
    pub fn new(albums: impl IntoIterator<Item = AlbumData>) -> Self {
        let albums = albums
            .into_iter()
            .map(|album| (album.id.clone(), album))
            .collect();
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Add or replace an album.
    ///
    /// # Errors
    /// Returns [`AlbumDataProviderError::Connection`] if the lock was poisoned.
    pub fn insert(&self, album: AlbumData) -> Result<(), AlbumDataProviderError> {
        let mut albums = self
            .albums
            .write()
            .map_err(|_| AlbumDataProviderError::connection("album catalogue lock poisoned"))?;
        albums.insert(album.id.clone(), album);
        Ok(())
    }
}

#[async_trait]
impl AlbumDataProvider for InMemoryAlbumCatalogue {
    async fn fetch_album(&self, album_id: &AlbumId) -> Result<AlbumData, AlbumDataProviderError> {
        let albums = self
            .albums
            .read()
            .map_err(|_| AlbumDataProviderError::connection("album catalogue lock poisoned"))?;
        albums
            .get(album_id)
            .cloned()
            .ok_or_else(|| AlbumDataProviderError::not_found(album_id.to_string()))
    }
}
