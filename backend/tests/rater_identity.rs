//! A user is one rater and one author whatever UUID spelling they arrive with.

use std::sync::Arc;

use reviews_backend::domain::ports::{CreateReviewRequest, RateAlbumRequest, ReviewCommand};
use reviews_backend::domain::{
    AlbumId, ErrorCode, FailureReason, ReviewService, UserId,
};
use reviews_backend::outbound::memory::{InMemoryAlbumCatalogue, InMemoryReviewStore};
use rstest::rstest;

const UPPERCASE: &str = "3FA85F64-5717-4562-B3FC-2C963F66AFA6";
const LOWERCASE: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
const SIMPLE: &str = "3fa85f6457174562b3fc2c963f66afa6";

fn user(raw: &str) -> UserId {
    UserId::new(raw).expect("user id")
}

fn review_request(author: &str, album_id: &AlbumId, rating: Option<i64>) -> CreateReviewRequest {
    CreateReviewRequest {
        author_id: user(author),
        album_id: album_id.clone(),
        content: "Still holds up".to_owned(),
        rating,
    }
}

#[rstest]
#[tokio::test]
async fn rating_and_reviews_follow_the_uuid_not_its_spelling() {
    let store = Arc::new(InMemoryReviewStore::default());
    let service = ReviewService::new(
        Arc::new(InMemoryAlbumCatalogue::default()),
        Arc::clone(&store),
        Arc::clone(&store),
    );
    let album_id = AlbumId::new("A1").expect("album id");

    service
        .rate_album(RateAlbumRequest {
            rater_id: user(UPPERCASE),
            album_id: album_id.clone(),
            value: 7,
        })
        .await
        .expect("rating recorded");

    let review = service
        .create_review(review_request(LOWERCASE, &album_id, None))
        .await
        .expect("earlier rating backs the review");
    assert_eq!(review.author_id.as_ref(), LOWERCASE);

    let err = service
        .create_review(review_request(SIMPLE, &album_id, Some(3)))
        .await
        .expect_err("same author already reviewed");
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.reason(), Some(FailureReason::DuplicateReview));

    assert_eq!(
        store
            .review_count_for(&album_id, &user(UPPERCASE))
            .expect("count reviews"),
        1
    );
}
