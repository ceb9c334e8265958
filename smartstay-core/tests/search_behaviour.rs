#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the search pipeline over an in-memory store.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use smartstay_core::test_support::{FixedScorer, MemoryStore};
use smartstay_core::{Hotel, HotelFilter, HotelStore, RESULT_CAP, SearchQuery, SearchResponse, search};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    store: RefCell<Option<MemoryStore>>,
    response: RefCell<Option<SearchResponse>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        store: RefCell::new(None),
        response: RefCell::new(None),
    }
}

fn run_search(context: &TestContext, query: &SearchQuery) {
    let store = context.store.borrow();
    let seeded = store.as_ref().expect("store must be seeded");
    let candidates: Vec<Hotel> = seeded.find(&HotelFilter::from_query(query)).collect();
    let response = search(candidates, query, &FixedScorer::new(7));
    *context.response.borrow_mut() = Some(response);
}

#[given("a store with listings priced 2000, 3000, and 5000")]
fn seeded_store(context: &TestContext) {
    let store = MemoryStore::with_hotels([
        Hotel::new(1, "Beach Hut", "Calangute, Goa", 2000),
        Hotel::new(2, "Hill Lodge", "Munnar, Kerala", 3000),
        Hotel::new(3, "City Tower", "Mumbai, Maharashtra", 5000),
    ]);
    *context.store.borrow_mut() = Some(store);
}

#[given("a store with five hundred listings")]
fn bulk_store(context: &TestContext) {
    let hotels =
        (1..=500).map(|id| Hotel::new(id, format!("Hotel {id}"), "Pune, Maharashtra", 1200));
    *context.store.borrow_mut() = Some(MemoryStore::with_hotels(hotels));
}

#[when("I search with a price ceiling of 3000")]
fn search_with_ceiling(context: &TestContext) {
    run_search(context, &SearchQuery::new().with_max_price(3000));
}

#[when("I search without any criteria")]
fn search_unfiltered(context: &TestContext) {
    run_search(context, &SearchQuery::new());
}

#[then("only the listings priced up to 3000 are returned")]
fn assert_price_ceiling(context: &TestContext) {
    let response = context.response.borrow();
    let result = response.as_ref().expect("search should have run");
    let ids: Vec<u64> = result.hotels.iter().map(|entry| entry.hotel.id).collect();
    assert_eq!(ids, vec![1, 2], "boundary listing must stay in");
}

#[then("the listings come back in stored order without scores")]
fn assert_stored_order(context: &TestContext) {
    let response = context.response.borrow();
    let result = response.as_ref().expect("search should have run");
    let ids: Vec<u64> = result.hotels.iter().map(|entry| entry.hotel.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(result.hotels.iter().all(|entry| entry.match_score.is_none()));
}

#[then("exactly twenty listings are returned")]
fn assert_capped(context: &TestContext) {
    let response = context.response.borrow();
    let result = response.as_ref().expect("search should have run");
    assert_eq!(result.count, RESULT_CAP);
    assert_eq!(result.hotels.len(), RESULT_CAP);
}

#[scenario(path = "tests/features/search.feature", index = 0)]
fn price_ceiling_includes_boundary(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/search.feature", index = 1)]
fn stored_order_preserved_without_free_text(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/search.feature", index = 2)]
fn results_are_capped(context: TestContext) {
    let _ = context;
}
