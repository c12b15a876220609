//! Reviews: free-text commentary on an album, optionally carrying a rating.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AlbumData, AlbumId, RatingValue, UserId};

/// Validation errors returned by [`ReviewContent::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewValidationError {
    /// The content was empty or whitespace.
    EmptyContent,
}

impl fmt::Display for ReviewValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "review content must not be empty"),
        }
    }
}

impl std::error::Error for ReviewValidationError {}

/// Review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(Uuid);

impl ReviewId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReviewId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Non-empty review body.
///
/// The text is stored exactly as written; trimming only decides emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReviewContent(String);

impl ReviewContent {
    /// Validate review text.
    ///
    /// # Examples
    /// ```
    /// use reviews_backend::domain::{ReviewContent, ReviewValidationError};
    ///
    /// assert!(ReviewContent::new("Great").is_ok());
    /// assert_eq!(
    ///     ReviewContent::new("  "),
    ///     Err(ReviewValidationError::EmptyContent),
    /// );
    /// ```
    pub fn new(content: impl Into<String>) -> Result<Self, ReviewValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ReviewValidationError::EmptyContent);
        }
        Ok(Self(content))
    }
}

impl AsRef<str> for ReviewContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ReviewContent> for String {
    fn from(value: ReviewContent) -> Self {
        value.0
    }
}

impl TryFrom<String> for ReviewContent {
    type Error = ReviewValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A persisted review.
///
/// ## Invariants
/// - A rating by `author_id` for `album_id` existed, or was written in the
///   same store operation, when the review was created.
/// - `rating` is present only when the creation request supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review identifier.
    pub id: ReviewId,
    /// Reviewed album.
    pub album_id: AlbumId,
    /// Review author.
    pub author_id: UserId,
    /// Review body.
    pub content: ReviewContent,
    /// Rating supplied alongside the review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingValue>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Review data handed to the store; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Reviewed album.
    pub album_id: AlbumId,
    /// Review author.
    pub author_id: UserId,
    /// Review body.
    pub content: ReviewContent,
}

impl NewReview {
    /// Materialise the review with store-assigned fields.
    pub fn into_review(
        self,
        id: ReviewId,
        rating: Option<RatingValue>,
        created_at: DateTime<Utc>,
    ) -> Review {
        Review {
            id,
            album_id: self.album_id,
            author_id: self.author_id,
            content: self.content,
            rating,
            created_at,
        }
    }
}

/// A review alongside the provider's data for the reviewed album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWithAlbum {
    /// Provider album data.
    pub album_data: AlbumData,
    /// The review itself.
    pub review: Review,
}
