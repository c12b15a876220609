//! Runtime settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{RatingScale, RatingScaleError};

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOG_JSON: bool = true;

fn default_fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json")
}

/// Settings for the `reviews` binary.
///
/// Values come from `REVIEWS_*` environment variables and configuration
/// files; command-line arguments are parsed separately by `clap`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REVIEWS")]
pub struct ReviewsSettings {
    /// Catalogue fixture used to seed the in-memory stores.
    pub fixture_path: Option<PathBuf>,
    /// Emit JSON log lines instead of the human-readable format.
    pub log_json: Option<bool>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    /// Lowest accepted rating.
    pub rating_min: Option<i64>,
    /// Highest accepted rating.
    pub rating_max: Option<i64>,
}

impl ReviewsSettings {
    /// Return the configured fixture path, falling back to the bundled one.
    pub fn fixture_path(&self) -> PathBuf {
        self.fixture_path
            .clone()
            .unwrap_or_else(default_fixture_path)
    }

    /// Whether logs are JSON; on unless explicitly disabled.
    pub fn log_json(&self) -> bool {
        self.log_json.unwrap_or(DEFAULT_LOG_JSON)
    }

    /// Return the configured log filter, falling back to `info`.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Build the rating scale, filling unset bounds from the default.
    ///
    /// # Errors
    /// Returns [`RatingScaleError`] when the minimum exceeds the maximum.
    pub fn rating_scale(&self) -> Result<RatingScale, RatingScaleError> {
        RatingScale::new(
            self.rating_min.unwrap_or(RatingScale::DEFAULT.min()),
            self.rating_max.unwrap_or(RatingScale::DEFAULT.max()),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ReviewsSettings {
        ReviewsSettings::load_from_iter([OsString::from("reviews")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("REVIEWS_FIXTURE_PATH", None::<String>),
            ("REVIEWS_LOG_JSON", None::<String>),
            ("REVIEWS_LOG_FILTER", None::<String>),
            ("REVIEWS_RATING_MIN", None::<String>),
            ("REVIEWS_RATING_MAX", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.log_json, None);
        assert_eq!(settings.rating_scale(), Ok(RatingScale::DEFAULT));
        assert!(settings.log_json());
        assert_eq!(settings.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(settings.fixture_path(), default_fixture_path());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "REVIEWS_FIXTURE_PATH",
                Some("/tmp/reviews_catalogue.json".to_owned()),
            ),
            ("REVIEWS_LOG_JSON", Some("false".to_owned())),
            ("REVIEWS_LOG_FILTER", Some("reviews_backend=debug".to_owned())),
            ("REVIEWS_RATING_MIN", Some("0".to_owned())),
            ("REVIEWS_RATING_MAX", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.log_json());
        assert_eq!(
            settings.rating_scale(),
            Ok(RatingScale::new(0, 5).expect("valid scale"))
        );
        assert_eq!(settings.log_filter(), "reviews_backend=debug");
        assert_eq!(
            settings.fixture_path(),
            PathBuf::from("/tmp/reviews_catalogue.json")
        );
    }

    #[rstest]
    fn explicit_true_keeps_json_logging() {
        let _guard = lock_env([("REVIEWS_LOG_JSON", Some("true".to_owned()))]);

        let settings = load_from_empty_args();
        assert_eq!(settings.log_json, Some(true));
        assert!(settings.log_json());
    }

    #[rstest]
    fn inverted_rating_bounds_are_reported() {
        let _guard = lock_env([
            ("REVIEWS_RATING_MIN", Some("9".to_owned())),
            ("REVIEWS_RATING_MAX", Some("2".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.rating_scale(),
            Err(RatingScaleError { min: 9, max: 2 })
        );
    }
}
