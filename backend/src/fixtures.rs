//! Catalogue fixtures for seeding the in-memory adapters.
//!
//! A fixture is a JSON document with four arrays: `albums`, `ratings`,
//! `reviews`, and `comments`. Reviews must be backed by a rating from the
//! same user, mirroring the invariant the live write path enforces.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::{AlbumData, AlbumId, Comment, Rating, Review, ReviewId, UserId};
use crate::outbound::memory::{InMemoryAlbumCatalogue, InMemoryReviewStore};

/// Errors returned while loading or seeding a fixture.
#[derive(Debug, Error)]
pub enum FixtureLoadError {
    /// The fixture file could not be read.
    #[error("failed to read fixture at {path}: {source}")]
    Read {
        /// Path to the fixture file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The fixture is not valid JSON or does not match the schema.
    #[error("fixture parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The fixture parsed but breaks a domain invariant.
    #[error("invalid fixture: {message}")]
    Invalid {
        /// Description of the broken invariant.
        message: String,
    },
    /// An adapter refused the seeded data.
    #[error("failed to seed fixture: {message}")]
    Seed {
        /// Adapter error message.
        message: String,
    },
}

impl FixtureLoadError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    fn seed(error: impl std::fmt::Display) -> Self {
        Self::Seed {
            message: error.to_string(),
        }
    }
}

/// Albums, ratings, reviews, and comments to preload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogueFixture {
    /// Albums known to the catalogue.
    #[serde(default)]
    pub albums: Vec<AlbumData>,
    /// Ratings by (album, rater).
    #[serde(default)]
    pub ratings: Vec<Rating>,
    /// Reviews; each needs a matching rating.
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Comments in display order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Seeded adapters ready to hand to the domain services.
pub struct SeededStores {
    /// Album provider.
    pub albums: Arc<InMemoryAlbumCatalogue>,
    /// Rating, review, and comment store.
    pub store: Arc<InMemoryReviewStore>,
}

impl CatalogueFixture {
    /// Parse and validate a fixture document.
    ///
    /// # Errors
    /// Returns [`FixtureLoadError::Parse`] for malformed JSON and
    /// [`FixtureLoadError::Invalid`] when the data breaks an invariant.
    ///
    /// # Examples
    /// ```
    /// use reviews_backend::fixtures::CatalogueFixture;
    ///
    /// let fixture = CatalogueFixture::from_json(r#"{ "albums": [] }"#).expect("valid fixture");
    /// assert!(fixture.reviews.is_empty());
    /// ```
    pub fn from_json(contents: &str) -> Result<Self, FixtureLoadError> {
        let fixture: Self = serde_json::from_str(contents)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Read, parse, and validate the fixture at `path`.
    ///
    /// # Errors
    /// Returns [`FixtureLoadError::Read`] when the file cannot be read, plus
    /// the errors of [`CatalogueFixture::from_json`].
    pub fn load(path: &Path) -> Result<Self, FixtureLoadError> {
        let read_error = |source: std::io::Error| FixtureLoadError::Read {
            path: path.to_path_buf(),
            source,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "fixture path must be a file",
            ))
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
        Self::from_json(&contents)
    }

    /// Check the cross-record invariants.
    ///
    /// # Errors
    /// Returns [`FixtureLoadError::Invalid`] describing the first problem.
    pub fn validate(&self) -> Result<(), FixtureLoadError> {
        let mut rated: HashSet<(&AlbumId, &UserId)> = HashSet::new();
        for rating in &self.ratings {
            if !rated.insert((&rating.album_id, &rating.rater_id)) {
                return Err(FixtureLoadError::invalid(format!(
                    "duplicate rating by {} for album {}",
                    rating.rater_id, rating.album_id
                )));
            }
        }

        let mut review_ids: HashSet<ReviewId> = HashSet::new();
        let mut reviewed: HashSet<(&AlbumId, &UserId)> = HashSet::new();
        for review in &self.reviews {
            let pair = (&review.album_id, &review.author_id);
            if !rated.contains(&pair) {
                return Err(FixtureLoadError::invalid(format!(
                    "review {} has no rating by its author",
                    review.id
                )));
            }
            if !reviewed.insert(pair) {
                return Err(FixtureLoadError::invalid(format!(
                    "author {} reviewed album {} twice",
                    review.author_id, review.album_id
                )));
            }
            if !review_ids.insert(review.id) {
                return Err(FixtureLoadError::invalid(format!(
                    "duplicate review id {}",
                    review.id
                )));
            }
        }

        if let Some(orphan) = self
            .comments
            .iter()
            .find(|comment| !review_ids.contains(&comment.review_id))
        {
            return Err(FixtureLoadError::invalid(format!(
                "comment {} references unknown review {}",
                orphan.id, orphan.review_id
            )));
        }
        Ok(())
    }

    /// Build in-memory adapters holding the fixture data.
    ///
    /// The fixture is validated first, so hand-built fixtures cannot seed a
    /// review without its rating.
    ///
    /// # Errors
    /// Returns [`FixtureLoadError::Invalid`] if the data breaks an invariant,
    /// or [`FixtureLoadError::Seed`] if an adapter rejects a record.
    pub fn seed(self, clock: Arc<dyn Clock>) -> Result<SeededStores, FixtureLoadError> {
        self.validate()?;
        let Self {
            albums,
            ratings,
            reviews,
            comments,
        } = self;
        let album_count = albums.len();
        let review_count = reviews.len();
        let comment_count = comments.len();

        let store = InMemoryReviewStore::new(clock);
        for rating in ratings {
            store.seed_rating(rating).map_err(FixtureLoadError::seed)?;
        }
        for review in reviews {
            store.seed_review(review).map_err(FixtureLoadError::seed)?;
        }
        for comment in comments {
            store.seed_comment(comment).map_err(FixtureLoadError::seed)?;
        }

        info!(
            albums = album_count,
            reviews = review_count,
            comments = comment_count,
            "catalogue fixture seeded"
        );
        Ok(SeededStores {
            albums: Arc::new(InMemoryAlbumCatalogue::new(albums)),
            store: Arc::new(store),
        })
    }
}

#[cfg(test)]
#[path = "fixtures_tests.rs"]
mod tests;
