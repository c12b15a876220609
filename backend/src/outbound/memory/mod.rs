//! In-memory adapters for the review ports.
//!
//! These back the `reviews` binary and the behaviour tests. They hold all
//! state in process and are seeded from a [`CatalogueFixture`](crate::fixtures::CatalogueFixture).

mod album_catalogue;
mod review_store;

pub use album_catalogue::InMemoryAlbumCatalogue;
pub use review_store::InMemoryReviewStore;
