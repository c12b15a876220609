//! Behaviour tests for offset pagination.

use std::cell::RefCell;

use pagination::{Page, PageRequest, PaginationError, paginate};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct PaginationWorld {
    items: RefCell<Vec<usize>>,
    outcome: RefCell<Option<Result<Page<usize>, PaginationError>>>,
}

impl PaginationWorld {
    fn page(&self) -> Page<usize> {
        match self.outcome.borrow().as_ref() {
            Some(Ok(page)) => page.clone(),
            Some(Err(err)) => panic!("expected a page, got {err}"),
            None => panic!("no page was requested"),
        }
    }
}

#[fixture]
fn world() -> PaginationWorld {
    PaginationWorld::default()
}

#[given("an ordered collection of {count} items")]
fn an_ordered_collection(world: &PaginationWorld, count: usize) {
    *world.items.borrow_mut() = (1..=count).collect();
}

#[when("page {offset} is requested with a limit of {limit}")]
fn page_is_requested(world: &PaginationWorld, offset: i64, limit: i64) {
    let request = PageRequest::from_raw(Some(offset), Some(limit)).expect("valid request");
    let items = world.items.borrow();
    let outcome = paginate(items.as_slice(), request);
    *world.outcome.borrow_mut() = Some(outcome);
}

#[then("the page holds items {first} through {last}")]
fn the_page_holds_items(world: &PaginationWorld, first: usize, last: usize) {
    let expected: Vec<usize> = (first..=last).collect();
    assert_eq!(world.page().items(), expected.as_slice());
}

#[then("the page is empty")]
fn the_page_is_empty(world: &PaginationWorld) {
    assert!(world.page().items().is_empty());
}

#[then("the next cursor is {next}")]
fn the_next_cursor_is(world: &PaginationWorld, next: usize) {
    assert_eq!(world.page().next(), Some(next));
}

#[then("the previous cursor is {prev}")]
fn the_previous_cursor_is(world: &PaginationWorld, prev: usize) {
    assert_eq!(world.page().prev(), Some(prev));
}

#[then("there is no next cursor")]
fn there_is_no_next_cursor(world: &PaginationWorld) {
    assert_eq!(world.page().next(), None);
}

#[then("there is no previous cursor")]
fn there_is_no_previous_cursor(world: &PaginationWorld) {
    assert_eq!(world.page().prev(), None);
}

#[then("the page reports a total of {total}")]
fn the_page_reports_a_total(world: &PaginationWorld, total: usize) {
    assert_eq!(world.page().total(), total);
}

#[then("the request is rejected as out of range")]
fn the_request_is_rejected(world: &PaginationWorld) {
    let outcome = world.outcome.borrow();
    assert!(matches!(
        outcome.as_ref(),
        Some(Err(PaginationError::InvalidRange { .. }))
    ));
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Middle page of a ten item collection"
)]
fn middle_page_of_a_ten_item_collection(world: PaginationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "First page of an empty collection"
)]
fn first_page_of_an_empty_collection(world: PaginationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Offset past the end of the collection"
)]
fn offset_past_the_end_of_the_collection(world: PaginationWorld) {
    let _ = world;
}
