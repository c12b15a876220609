//! Offset pagination primitives shared by backend use cases.
//!
//! Callers validate raw `offset`/`limit` input with [`PageRequest::from_raw`]
//! and slice an ordered collection with [`paginate`] or [`paginate_owned`].
//! The resulting [`Page`] carries the slice, the total size of the source
//! collection, and the offsets of the adjacent pages.
//!
//! Offsets count pages, not items: page `n` covers the items in
//! `[n * limit, n * limit + limit)`.
//!
//! # Examples
//! ```
//! use pagination::{PageRequest, paginate};
//!
//! let items: Vec<u32> = (1..=10).collect();
//! let request = PageRequest::from_raw(Some(1), Some(4)).expect("valid request");
//! let page = paginate(&items, request).expect("offset in range");
//!
//! assert_eq!(page.items(), &[5, 6, 7, 8]);
//! assert_eq!(page.next(), Some(2));
//! assert_eq!(page.prev(), Some(0));
//! assert_eq!(page.total(), 10);
//! ```

mod error;
mod page;
mod request;

pub use error::{PageRequestError, PaginationError};
pub use page::{Page, paginate, paginate_owned};
pub use request::PageRequest;
