//! Unit coverage for page slicing and cursor computation.

use std::num::NonZeroUsize;

use rstest::rstest;
use serde_json::json;

use super::*;

fn request(offset: usize, limit: usize) -> PageRequest {
    PageRequest::new(offset, NonZeroUsize::new(limit).expect("non-zero limit"))
}

fn numbered(count: u32) -> Vec<u32> {
    (1..=count).collect()
}

#[rstest]
fn second_page_of_ten_items() {
    let page = paginate(&numbered(10), request(1, 4)).expect("in range");

    assert_eq!(page.items(), &[5, 6, 7, 8]);
    assert_eq!(page.next(), Some(2));
    assert_eq!(page.prev(), Some(0));
    assert_eq!(page.total(), 10);
}

#[rstest]
fn empty_collection_at_offset_zero_is_an_empty_page() {
    let page = paginate::<u32>(&[], request(0, 5)).expect("offset zero");

    assert!(page.items().is_empty());
    assert_eq!(page.next(), None);
    assert_eq!(page.prev(), None);
    assert_eq!(page.total(), 0);
}

#[rstest]
fn last_page_is_clipped_and_has_no_next() {
    let page = paginate(&numbered(10), request(2, 4)).expect("in range");

    assert_eq!(page.items(), &[9, 10]);
    assert_eq!(page.next(), None);
    assert_eq!(page.prev(), Some(1));
}

#[rstest]
fn exact_fit_has_no_next() {
    let page = paginate(&numbered(8), request(1, 4)).expect("in range");

    assert_eq!(page.items(), &[5, 6, 7, 8]);
    assert_eq!(page.next(), None);
}

#[rstest]
#[case(0, 3, 0)]
#[case(0, 3, 7)]
#[case(0, 1, 100)]
fn offset_zero_never_fails(#[case] offset: usize, #[case] limit: usize, #[case] len: u32) {
    let page = paginate(&numbered(len), request(offset, limit)).expect("offset zero");
    assert_eq!(page.prev(), None);
}

#[rstest]
#[case(1, 4, 4)]
#[case(3, 4, 10)]
#[case(1, 1, 1)]
#[case(1, 5, 0)]
fn offsets_past_the_end_are_rejected(#[case] offset: usize, #[case] limit: usize, #[case] len: u32) {
    let err = paginate(&numbered(len), request(offset, limit)).expect_err("out of range");
    assert_eq!(
        err,
        PaginationError::InvalidRange {
            offset,
            limit,
            total: usize::try_from(len).expect("small length"),
        }
    );
}

#[rstest]
fn overflowing_start_index_is_out_of_range() {
    let err = paginate(&numbered(3), request(usize::MAX, 2)).expect_err("overflow");
    assert!(matches!(err, PaginationError::InvalidRange { .. }));
}

#[rstest]
#[case(1, 2)]
#[case(4, 3)]
fn prev_is_present_for_non_zero_offsets(#[case] offset: usize, #[case] limit: usize) {
    let page = paginate(&numbered(20), request(offset, limit)).expect("in range");
    assert_eq!(page.prev(), Some(offset - 1));
}

#[rstest]
#[case(0, 4)]
#[case(1, 4)]
#[case(7, 3)]
#[case(10, 1)]
#[case(10, 10)]
#[case(11, 10)]
fn walking_every_page_reproduces_the_collection(#[case] len: u32, #[case] limit: usize) {
    let items = numbered(len);
    let mut collected = Vec::new();
    let mut offset = Some(0);

    while let Some(current) = offset {
        let page = paginate(&items, request(current, limit)).expect("cursor in range");
        collected.extend_from_slice(page.items());
        offset = page.next();
    }

    assert_eq!(collected, items);
}

#[rstest]
fn owned_and_borrowed_slicing_agree() {
    let items = numbered(9);
    let borrowed = paginate(&items, request(1, 4)).expect("in range");
    let owned = paginate_owned(items, request(1, 4)).expect("in range");
    assert_eq!(borrowed, owned);
}

#[rstest]
fn owned_slicing_rejects_out_of_range_offsets() {
    let err = paginate_owned(numbered(2), request(1, 2)).expect_err("out of range");
    assert!(matches!(err, PaginationError::InvalidRange { total: 2, .. }));
}

#[rstest]
fn map_keeps_cursors_and_total() {
    let page = paginate(&numbered(10), request(1, 4))
        .expect("in range")
        .map(|value| value.to_string());

    assert_eq!(page.items(), &["5", "6", "7", "8"]);
    assert_eq!(page.next(), Some(2));
    assert_eq!(page.prev(), Some(0));
    assert_eq!(page.total(), 10);
}

#[rstest]
fn serialises_with_null_cursors() {
    let page = paginate(&numbered(2), request(0, 5)).expect("offset zero");
    let value = serde_json::to_value(&page).expect("serialise page");

    assert_eq!(
        value,
        json!({ "items": [1, 2], "next": null, "prev": null, "total": 2 })
    );
}
