//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`AlbumDataProvider`]) are implemented by
//! outbound adapters. Driving ports ([`ReviewQuery`], [`ReviewCommand`],
//! [`CommentQuery`]) are implemented by domain services and called by
//! inbound adapters such as the `reviews` binary.

mod macros;
pub(crate) use macros::define_port_error;

mod album_data_provider;
mod comment_query;
mod comment_repository;
mod rating_repository;
mod review_command;
mod review_query;
mod review_repository;

#[cfg(test)]
pub use album_data_provider::MockAlbumDataProvider;
pub use album_data_provider::{
    AlbumDataProvider, AlbumDataProviderError, FIXTURE_ALBUM_NAME, FixtureAlbumDataProvider,
};
#[cfg(test)]
pub use comment_query::MockCommentQuery;
pub use comment_query::{CommentQuery, PageCommentsRequest};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{
    CommentRepository, CommentRepositoryError, FixtureCommentRepository,
};
#[cfg(test)]
pub use rating_repository::MockRatingRepository;
pub use rating_repository::{FixtureRatingRepository, RatingRepository, RatingRepositoryError};
#[cfg(test)]
pub use review_command::MockReviewCommand;
pub use review_command::{CreateReviewRequest, RateAlbumRequest, ReviewCommand};
#[cfg(test)]
pub use review_query::MockReviewQuery;
pub use review_query::ReviewQuery;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::{FixtureReviewRepository, ReviewRepository, ReviewRepositoryError};
