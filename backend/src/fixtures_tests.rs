//! Coverage for fixture parsing, validation, and seeding.

use std::fs;

use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ports::{CommentRepository, RatingRepository, ReviewRepository};

const RATER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const REVIEW: &str = "0b6f2c8e-5a43-4f1d-9e2a-7c3d1b9e4f60";

fn rating_json() -> serde_json::Value {
    json!({ "albumId": "A1", "raterId": RATER, "value": 8 })
}

fn review_json() -> serde_json::Value {
    json!({
        "id": REVIEW,
        "albumId": "A1",
        "authorId": RATER,
        "content": "Great",
        "createdAt": "2026-03-01T12:00:00Z"
    })
}

fn comment_json(id: &str, review_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "reviewId": review_id,
        "authorId": RATER,
        "content": "Nice",
        "createdAt": "2026-03-01T13:00:00Z"
    })
}

#[rstest]
fn bundled_fixture_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue.json");

    let fixture = CatalogueFixture::load(&path).expect("bundled fixture loads");

    assert_eq!(fixture.albums.len(), 3);
    assert_eq!(fixture.reviews.len(), 1);
    assert_eq!(fixture.comments.len(), 5);
}

#[rstest]
fn review_without_rating_is_invalid() {
    let document = json!({ "reviews": [review_json()] }).to_string();

    let err = CatalogueFixture::from_json(&document).expect_err("no rating");

    assert!(matches!(err, FixtureLoadError::Invalid { .. }));
    assert!(err.to_string().contains("has no rating"));
}

#[rstest]
fn duplicate_ratings_are_invalid() {
    let document = json!({ "ratings": [rating_json(), rating_json()] }).to_string();

    let err = CatalogueFixture::from_json(&document).expect_err("duplicate rating");

    assert!(matches!(err, FixtureLoadError::Invalid { .. }));
}

#[rstest]
fn orphan_comments_are_invalid() {
    let document = json!({
        "ratings": [rating_json()],
        "reviews": [review_json()],
        "comments": [comment_json(
            "a1d4e7f0-1111-4c2b-8d3e-000000000001",
            "7d0a7f5e-0000-4000-8000-000000000000"
        )]
    })
    .to_string();

    let err = CatalogueFixture::from_json(&document).expect_err("orphan comment");

    assert!(err.to_string().contains("unknown review"));
}

#[rstest]
#[case("not json")]
#[case(r#"{ "albums": [{ "id": "has space", "name": "x" }] }"#)]
#[case(r#"{ "ratings": [{ "albumId": "A1", "raterId": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "value": 11 }] }"#)]
#[case(r#"{ "unexpected": [] }"#)]
fn malformed_documents_fail_to_parse(#[case] document: &str) {
    let err = CatalogueFixture::from_json(document).expect_err("parse failure");
    assert!(matches!(err, FixtureLoadError::Parse(_)));
}

#[rstest]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    let err = CatalogueFixture::load(&path).expect_err("missing file");

    assert!(matches!(err, FixtureLoadError::Read { .. }));
}

#[rstest]
fn loads_fixture_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalogue.json");
    let document = json!({
        "albums": [{ "id": "A1", "name": "Blue" }],
        "ratings": [rating_json()],
        "reviews": [review_json()]
    });
    fs::write(&path, document.to_string()).expect("write fixture");

    let fixture = CatalogueFixture::load(&path).expect("fixture loads");

    assert_eq!(fixture.ratings.len(), 1);
    let content: &str = fixture.reviews[0].content.as_ref();
    assert_eq!(content, "Great");
}

#[tokio::test]
async fn seeding_populates_the_stores() {
    let document = json!({
        "albums": [{ "id": "A1", "name": "Blue" }],
        "ratings": [rating_json()],
        "reviews": [review_json()],
        "comments": [
            comment_json("a1d4e7f0-1111-4c2b-8d3e-000000000001", REVIEW),
            comment_json("a1d4e7f0-1111-4c2b-8d3e-000000000002", REVIEW)
        ]
    })
    .to_string();
    let fixture = CatalogueFixture::from_json(&document).expect("valid fixture");

    let seeded = fixture.seed(Arc::new(DefaultClock)).expect("seeded");

    let album_id = AlbumId::new("A1").expect("album id");
    let rater = UserId::new(RATER).expect("user id");
    let review_id: ReviewId = REVIEW.parse().expect("review id");
    assert!(seeded.store.exists(&album_id, &rater).await.expect("lookup"));
    assert!(
        seeded
            .store
            .find_by_id(&review_id)
            .await
            .expect("lookup")
            .is_some()
    );
    assert_eq!(
        seeded
            .store
            .find_all_by_review_id(&review_id)
            .await
            .expect("comments")
            .len(),
        2
    );
}

#[rstest]
fn seeding_a_hand_built_fixture_validates_it() {
    let review: Review = serde_json::from_value(review_json()).expect("review");
    let fixture = CatalogueFixture {
        reviews: vec![review],
        ..CatalogueFixture::default()
    };

    let Err(err) = fixture.seed(Arc::new(DefaultClock)) else {
        panic!("a review without a rating must not seed");
    };

    assert!(matches!(err, FixtureLoadError::Invalid { .. }));
    assert!(err.to_string().contains("has no rating"));
}
