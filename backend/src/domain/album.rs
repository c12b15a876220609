//! Album identity and the provider's album payload.
//!
//! Albums are owned by an external catalogue provider; this crate only reads
//! them and never persists album data of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum accepted length of an album identifier.
pub const ALBUM_ID_MAX: usize = 64;

/// Validation errors returned by [`AlbumId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumValidationError {
    /// The identifier was empty.
    EmptyId,
    /// The identifier exceeded [`ALBUM_ID_MAX`] characters.
    IdTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The identifier contained characters other than ASCII letters and digits.
    InvalidCharacters,
}

impl fmt::Display for AlbumValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "album id must not be empty"),
            Self::IdTooLong { max } => write!(f, "album id must be at most {max} characters"),
            Self::InvalidCharacters => {
                write!(f, "album id may only contain ASCII letters and digits")
            }
        }
    }
}

impl std::error::Error for AlbumValidationError {}

/// Opaque album identifier issued by the catalogue provider.
///
/// # Examples
/// ```
/// use reviews_backend::domain::AlbumId;
///
/// let id = AlbumId::new("4aawyAB9vmqN3uQ7FjRGTy").expect("valid id");
/// assert_eq!(id.as_ref(), "4aawyAB9vmqN3uQ7FjRGTy");
/// assert!(AlbumId::new("not valid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlbumId(String);

impl AlbumId {
    /// Validate and construct an [`AlbumId`].
    pub fn new(id: impl Into<String>) -> Result<Self, AlbumValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(AlbumValidationError::EmptyId);
        }
        if id.chars().count() > ALBUM_ID_MAX {
            return Err(AlbumValidationError::IdTooLong { max: ALBUM_ID_MAX });
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AlbumValidationError::InvalidCharacters);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AlbumId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AlbumId> for String {
    fn from(value: AlbumId) -> Self {
        value.0
    }
}

impl TryFrom<String> for AlbumId {
    type Error = AlbumValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Album metadata as returned by the catalogue provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumData {
    /// Provider identifier.
    pub id: AlbumId,
    /// Album title.
    pub name: String,
    /// Credited artist names, in billing order.
    #[serde(default)]
    pub artists: Vec<String>,
    /// Release date in whatever precision the provider reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Cover art location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AlbumData {
    /// Minimal album record carrying only an identifier and a title.
    pub fn new(id: AlbumId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artists: Vec::new(),
            release_date: None,
            image_url: None,
        }
    }
}
