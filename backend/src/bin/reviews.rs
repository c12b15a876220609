//! Drive the review use cases against fixture-seeded in-memory stores.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use serde::Serialize;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use reviews_backend::config::ReviewsSettings;
use reviews_backend::domain::ports::{
    CommentQuery, CreateReviewRequest, PageCommentsRequest, RateAlbumRequest, ReviewCommand,
    ReviewQuery,
};
use reviews_backend::domain::{
    AlbumId, CommentService, Error, ReviewId, ReviewService, TraceId, UserId,
};
use reviews_backend::fixtures::CatalogueFixture;

/// `reviews` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "reviews",
    about = "Read and write album reviews against a seeded catalogue",
    version
)]
struct CliArgs {
    /// Catalogue fixture to seed from. Overrides `REVIEWS_FIXTURE_PATH`.
    #[arg(long = "fixture", value_name = "path", global = true)]
    fixture: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show a review with its album data.
    GetReview {
        #[arg(long = "album-id", value_parser = parse_album_id)]
        album_id: AlbumId,
        #[arg(long = "review-id", value_parser = parse_review_id)]
        review_id: ReviewId,
    },
    /// Create a review, optionally rating the album at the same time.
    CreateReview {
        #[arg(long = "author-id", value_parser = parse_user_id)]
        author_id: UserId,
        #[arg(long = "album-id", value_parser = parse_album_id)]
        album_id: AlbumId,
        #[arg(long)]
        content: String,
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i64>,
    },
    /// Delete a review and its comments.
    DeleteReview {
        #[arg(long = "review-id", value_parser = parse_review_id)]
        review_id: ReviewId,
    },
    /// Rate an album without reviewing it.
    RateAlbum {
        #[arg(long = "rater-id", value_parser = parse_user_id)]
        rater_id: UserId,
        #[arg(long = "album-id", value_parser = parse_album_id)]
        album_id: AlbumId,
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },
    /// Show one page of a review's comments.
    Comments {
        #[arg(long = "review-id", value_parser = parse_review_id)]
        review_id: ReviewId,
        #[arg(long, allow_negative_numbers = true)]
        offset: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },
}

fn parse_album_id(raw: &str) -> Result<AlbumId, String> {
    AlbumId::new(raw).map_err(|error| error.to_string())
}

fn parse_review_id(raw: &str) -> Result<ReviewId, String> {
    raw.parse()
        .map_err(|error| format!("review id must be a UUID: {error}"))
}

fn parse_user_id(raw: &str) -> Result<UserId, String> {
    UserId::new(raw).map_err(|error| error.to_string())
}

/// Outcome of a single use-case invocation.
#[derive(Debug, PartialEq, Eq)]
enum Rendered {
    /// Pretty-printed JSON result for stdout.
    Success(String),
    /// Redacted error payload for stderr.
    Failure(String),
}

impl Rendered {
    /// Write the payload to its stream and pick the exit status.
    fn emit(self, stdout: &mut impl Write, stderr: &mut impl Write) -> io::Result<ExitCode> {
        match self {
            Self::Success(body) => {
                writeln!(stdout, "{body}")?;
                Ok(ExitCode::SUCCESS)
            }
            Self::Failure(payload) => {
                writeln!(stderr, "{payload}")?;
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn main() -> io::Result<ExitCode> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<ExitCode> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = ReviewsSettings::load_from_iter([OsString::from("reviews")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    init_tracing(&settings);

    let fixture_path = args.fixture.unwrap_or_else(|| settings.fixture_path());
    let seeded = CatalogueFixture::load(&fixture_path)
        .and_then(|fixture| fixture.seed(Arc::new(DefaultClock)))
        .map_err(|error| io::Error::other(format!("seed catalogue: {error}")))?;

    let rating_scale = settings
        .rating_scale()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let reviews = ReviewService::new(
        Arc::clone(&seeded.albums),
        Arc::clone(&seeded.store),
        Arc::clone(&seeded.store),
    )
    .with_rating_scale(rating_scale);
    let comments = CommentService::new(Arc::clone(&seeded.store));

    let trace_id = TraceId::generate();
    let output = TraceId::scope(trace_id, async {
        match args.command {
            Command::GetReview {
                album_id,
                review_id,
            } => render(reviews.get_review(&album_id, &review_id).await),
            Command::CreateReview {
                author_id,
                album_id,
                content,
                rating,
            } => render(
                reviews
                    .create_review(CreateReviewRequest {
                        author_id,
                        album_id,
                        content,
                        rating,
                    })
                    .await,
            ),
            Command::DeleteReview { review_id } => render(
                reviews
                    .delete_review(&review_id)
                    .await
                    .map(|()| serde_json::json!({ "deleted": review_id })),
            ),
            Command::RateAlbum {
                rater_id,
                album_id,
                value,
            } => render(
                reviews
                    .rate_album(RateAlbumRequest {
                        rater_id,
                        album_id,
                        value,
                    })
                    .await,
            ),
            Command::Comments {
                review_id,
                offset,
                limit,
            } => render(
                comments
                    .page_comments(PageCommentsRequest {
                        review_id,
                        offset,
                        limit,
                    })
                    .await,
            ),
        }
    })
    .await?;

    output.emit(&mut io::stdout().lock(), &mut io::stderr().lock())
}

fn init_tracing(settings: &ReviewsSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let result = if settings.log_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Serialise a use-case result; domain errors become the redacted payload.
fn render<T: Serialize>(result: Result<T, Error>) -> io::Result<Rendered> {
    match result {
        Ok(value) => serde_json::to_string_pretty(&value)
            .map(Rendered::Success)
            .map_err(io::Error::other),
        Err(error) => serde_json::to_string(&error.redacted())
            .map(Rendered::Failure)
            .map_err(io::Error::other),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for argument parsing and output rendering.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parses_create_review_with_negative_rating() {
        let args = CliArgs::try_parse_from([
            "reviews",
            "create-review",
            "--author-id",
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "--album-id",
            "A1",
            "--content",
            "Great",
            "--rating",
            "-2",
        ])
        .expect("arguments should parse");

        match args.command {
            Command::CreateReview { rating, .. } => assert_eq!(rating, Some(-2)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[rstest]
    #[case(&["reviews", "get-review", "--album-id", "not valid", "--review-id", "0b6f2c8e-5a43-4f1d-9e2a-7c3d1b9e4f60"])]
    #[case(&["reviews", "delete-review", "--review-id", "42"])]
    #[case(&["reviews", "rate-album", "--rater-id", "nobody", "--album-id", "A1", "--value", "5"])]
    fn rejects_malformed_identifiers(#[case] argv: &[&str]) {
        assert!(CliArgs::try_parse_from(argv).is_err());
    }

    #[rstest]
    fn fixture_flag_is_accepted_after_the_subcommand() {
        let args = CliArgs::try_parse_from([
            "reviews",
            "comments",
            "--review-id",
            "0b6f2c8e-5a43-4f1d-9e2a-7c3d1b9e4f60",
            "--fixture",
            "/tmp/catalogue.json",
        ])
        .expect("arguments should parse");

        assert_eq!(args.fixture, Some(PathBuf::from("/tmp/catalogue.json")));
    }

    #[rstest]
    fn domain_errors_go_to_stderr_as_plain_json() {
        let rendered = render::<()>(Err(Error::not_found("There are no comments for this review.")))
            .expect("payload serialises");
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = rendered
            .emit(&mut stdout, &mut stderr)
            .expect("write payload");

        assert_eq!(code, ExitCode::FAILURE);
        assert!(stdout.is_empty());
        let line = String::from_utf8(stderr).expect("utf-8 payload");
        let payload: serde_json::Value =
            serde_json::from_str(line.trim_end()).expect("payload is unescaped JSON");
        assert_eq!(payload["code"], "not_found");
        assert_eq!(payload["message"], "There are no comments for this review.");
    }

    #[rstest]
    fn successful_results_go_to_stdout() {
        let rendered = render(Ok(serde_json::json!({ "deleted": true }))).expect("serialises");
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = rendered
            .emit(&mut stdout, &mut stderr)
            .expect("write result");

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(stderr.is_empty());
        let body: serde_json::Value = serde_json::from_slice(&stdout).expect("result is JSON");
        assert_eq!(body["deleted"], true);
    }
}
