//! Port for rating persistence.

use async_trait::async_trait;

use crate::domain::{AlbumId, Rating, RatingValue, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by rating repository adapters.
    pub enum RatingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "rating repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "rating repository query failed: {message}",
    }
}

/// Port for reading and writing album ratings.
///
/// Adapters must keep at most one rating per (album, rater) pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Whether `user_id` has rated `album_id`.
    async fn exists(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
    ) -> Result<bool, RatingRepositoryError>;

    /// Write the rating for the pair, replacing any previous value.
    async fn create(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
        value: RatingValue,
    ) -> Result<Rating, RatingRepositoryError>;
}

/// Fixture repository with no stored ratings that accepts every write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRatingRepository;

#[async_trait]
impl RatingRepository for FixtureRatingRepository {
    async fn exists(
        &self,
        _album_id: &AlbumId,
        _user_id: &UserId,
    ) -> Result<bool, RatingRepositoryError> {
        Ok(false)
    }

    async fn create(
        &self,
        album_id: &AlbumId,
        user_id: &UserId,
        value: RatingValue,
    ) -> Result<Rating, RatingRepositoryError> {
        Ok(Rating {
            album_id: album_id.clone(),
            rater_id: user_id.clone(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[tokio::test]
    async fn fixture_repository_reports_no_rating() {
        let exists = FixtureRatingRepository
            .exists(&AlbumId::new("A1").expect("album id"), &UserId::random())
            .await
            .expect("fixture lookup should succeed");
        assert!(!exists);
    }

    #[tokio::test]
    async fn fixture_repository_echoes_created_rating() {
        let album_id = AlbumId::new("A1").expect("album id");
        let user_id = UserId::random();
        let value = RatingValue::new(8).expect("rating");

        let rating = FixtureRatingRepository
            .create(&album_id, &user_id, value)
            .await
            .expect("fixture create should succeed");

        assert_eq!(rating.album_id, album_id);
        assert_eq!(rating.rater_id, user_id);
        assert_eq!(rating.value, value);
    }
}
