//! Page envelope and the slicing algorithm.

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;
use crate::request::PageRequest;

/// A bounded slice of an ordered collection.
///
/// `next` and `prev` hold the offsets of the adjacent pages, or `None` when
/// no such page exists. `total` is the size of the source collection, not of
/// the slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    next: Option<usize>,
    prev: Option<usize>,
    total: usize,
}

impl<T> Page<T> {
    /// Items on this page, in source order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Offset of the following page.
    #[must_use]
    pub const fn next(&self) -> Option<usize> {
        self.next
    }

    /// Offset of the preceding page.
    #[must_use]
    pub const fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Size of the source collection.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Convert the items while keeping the cursors and total.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next: self.next,
            prev: self.prev,
            total: self.total,
        }
    }
}

/// Item bounds of the requested page within a collection of `total` items.
///
/// Offset zero is always in range, even for an empty collection. Any other
/// offset must start strictly inside the collection.
fn page_bounds(request: PageRequest, total: usize) -> Result<(usize, usize), PaginationError> {
    let offset = request.offset();
    let limit = request.limit();
    let out_of_range = PaginationError::InvalidRange {
        offset,
        limit,
        total,
    };

    let start = offset.checked_mul(limit).ok_or(out_of_range)?;
    if offset != 0 && start >= total {
        return Err(out_of_range);
    }
    let end = start.saturating_add(limit).min(total);
    Ok((start, end))
}

fn cursors(request: PageRequest, end: usize, total: usize) -> (Option<usize>, Option<usize>) {
    let offset = request.offset();
    let next = if end < total {
        offset.checked_add(1)
    } else {
        None
    };
    (next, offset.checked_sub(1))
}

/// Slice a borrowed collection.
///
/// # Errors
/// Returns [`PaginationError::InvalidRange`] when a non-zero offset points at
/// or past the end of `items`.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use pagination::{PageRequest, paginate};
///
/// let limit = NonZeroUsize::new(5).expect("non-zero");
/// let page = paginate::<u8>(&[], PageRequest::new(0, limit)).expect("offset zero");
/// assert!(page.items().is_empty());
/// assert_eq!(page.next(), None);
/// assert_eq!(page.prev(), None);
/// ```
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Result<Page<T>, PaginationError> {
    let total = items.len();
    let (start, end) = page_bounds(request, total)?;
    let slice = items
        .get(start..end)
        .ok_or(PaginationError::InvalidRange {
            offset: request.offset(),
            limit: request.limit(),
            total,
        })?
        .to_vec();
    let (next, prev) = cursors(request, end, total);
    Ok(Page {
        items: slice,
        next,
        prev,
        total,
    })
}

/// Slice an owned collection without cloning the selected items.
///
/// # Errors
/// Returns [`PaginationError::InvalidRange`] under the same conditions as
/// [`paginate`].
pub fn paginate_owned<T>(items: Vec<T>, request: PageRequest) -> Result<Page<T>, PaginationError> {
    let total = items.len();
    let (start, end) = page_bounds(request, total)?;
    let slice: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect();
    let (next, prev) = cursors(request, end, total);
    Ok(Page {
        items: slice,
        next,
        prev,
        total,
    })
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
