//! Album ratings and the rating requirement attached to review creation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AlbumId, UserId};

/// Validation errors returned by [`RatingScale::value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValidationError {
    /// The score fell outside the scale.
    OutOfRange {
        /// Score supplied by the caller.
        value: i64,
        /// Lowest accepted score.
        min: i64,
        /// Highest accepted score.
        max: i64,
    },
}

impl fmt::Display for RatingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { value, min, max } => {
                write!(f, "rating must be between {min} and {max}, got {value}")
            }
        }
    }
}

impl std::error::Error for RatingValidationError {}

/// Error returned by [`RatingScale::new`] when `min` exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingScaleError {
    /// Requested lower bound.
    pub min: i64,
    /// Requested upper bound.
    pub max: i64,
}

impl fmt::Display for RatingScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rating scale minimum {} exceeds maximum {}",
            self.min, self.max
        )
    }
}

impl std::error::Error for RatingScaleError {}

/// Inclusive range of scores the service accepts.
///
/// Defaults to `1..=10`; deployments override it through settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingScale {
    min: i64,
    max: i64,
}

impl RatingScale {
    /// Scale used when nothing else is configured.
    pub const DEFAULT: Self = Self { min: 1, max: 10 };

    /// Build a scale from inclusive bounds.
    pub fn new(min: i64, max: i64) -> Result<Self, RatingScaleError> {
        if min > max {
            return Err(RatingScaleError { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lowest accepted score.
    pub fn min(self) -> i64 {
        self.min
    }

    /// Highest accepted score.
    pub fn max(self) -> i64 {
        self.max
    }

    /// Validate a raw score against this scale.
    pub fn value(self, raw: i64) -> Result<RatingValue, RatingValidationError> {
        if (self.min..=self.max).contains(&raw) {
            Ok(RatingValue(raw))
        } else {
            Err(RatingValidationError::OutOfRange {
                value: raw,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A user's score for an album.
///
/// Values are range-checked when written through a [`RatingScale`]; stored
/// values deserialise as-is.
///
/// # Examples
/// ```
/// use reviews_backend::domain::{RatingScale, RatingValue};
///
/// let value = RatingValue::new(5).expect("in range");
/// assert_eq!(value.get(), 5);
/// assert!(RatingValue::new(11).is_err());
///
/// let wide = RatingScale::new(0, 100).expect("valid scale");
/// assert_eq!(wide.value(42).expect("in range").get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingValue(i64);

impl RatingValue {
    /// Validate a raw score against [`RatingScale::DEFAULT`].
    pub fn new(value: i64) -> Result<Self, RatingValidationError> {
        RatingScale::DEFAULT.value(value)
    }

    /// The score as an integer.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RatingValue> for i64 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}

/// One user's rating of one album.
///
/// At most one rating exists per (`album_id`, `rater_id`) pair; writing a new
/// value for the same pair replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Rated album.
    pub album_id: AlbumId,
    /// User who gave the rating.
    pub rater_id: UserId,
    /// Score.
    pub value: RatingValue,
}

/// What a review write must guarantee about the author's rating.
///
/// Produced by the rating gate and re-asserted by the review store inside the
/// same atomic write as the review itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingRequirement {
    /// A rating for the pair must already exist when the review is written.
    Existing,
    /// The rating must be written (or replaced) together with the review.
    Upsert(RatingValue),
}

impl RatingRequirement {
    /// Rating value to embed in the review, if one was supplied.
    pub fn supplied_value(self) -> Option<RatingValue> {
        match self {
            Self::Existing => None,
            Self::Upsert(value) => Some(value),
        }
    }
}
