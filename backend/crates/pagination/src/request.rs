//! Validated offset/limit pair.

use std::num::NonZeroUsize;

use crate::error::PageRequestError;

/// A validated page request.
///
/// ## Invariants
/// - `limit` is at least one.
/// - `offset` is a page index, not an item index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    offset: usize,
    limit: NonZeroUsize,
}

impl PageRequest {
    /// Build a request from already validated parts.
    #[must_use]
    pub const fn new(offset: usize, limit: NonZeroUsize) -> Self {
        Self { offset, limit }
    }

    /// Validate raw caller input.
    ///
    /// Both values must be present; `offset` must be non-negative and `limit`
    /// strictly positive.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] describing the first failed constraint.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// assert!(PageRequest::from_raw(Some(0), Some(5)).is_ok());
    /// assert_eq!(
    ///     PageRequest::from_raw(Some(0), None),
    ///     Err(PageRequestError::MissingLimit),
    /// );
    /// ```
    pub fn from_raw(offset: Option<i64>, limit: Option<i64>) -> Result<Self, PageRequestError> {
        let raw_offset = offset.ok_or(PageRequestError::MissingOffset)?;
        let raw_limit = limit.ok_or(PageRequestError::MissingLimit)?;

        if raw_offset < 0 {
            return Err(PageRequestError::NegativeOffset { offset: raw_offset });
        }
        if raw_limit < 1 {
            return Err(PageRequestError::NonPositiveLimit { limit: raw_limit });
        }

        let page_offset = usize::try_from(raw_offset)
            .map_err(|_| PageRequestError::OffsetTooLarge { offset: raw_offset })?;
        let page_limit = usize::try_from(raw_limit)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(PageRequestError::LimitTooLarge { limit: raw_limit })?;

        Ok(Self::new(page_offset, page_limit))
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit.get()
    }
}
