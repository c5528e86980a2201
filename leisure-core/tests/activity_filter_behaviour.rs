#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the manual activity filters.

use std::cell::RefCell;
use std::collections::BTreeSet;

use leisure_core::test_support::activity;
use leisure_core::{ActivityFilter, ActivityId, Capacity, Catalog, Category, PartySize};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const WALK: ActivityId = 1;
const ESCAPE_ROOM: ActivityId = 2;
const ROWING: ActivityId = 3;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    catalog: RefCell<Option<Catalog>>,
    candidates: RefCell<Option<BTreeSet<ActivityId>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        catalog: RefCell::new(None),
        candidates: RefCell::new(None),
    }
}

fn apply(context: &TestContext, filter: ActivityFilter) {
    let catalog = context.catalog.borrow();
    let catalog = catalog.as_ref().expect("catalog set up");
    *context.candidates.borrow_mut() = Some(filter.candidates(catalog));
}

fn remaining(context: &TestContext) -> BTreeSet<ActivityId> {
    context.candidates.borrow().clone().expect("filter applied")
}

#[given("a catalog of a free walk, a pricey escape room and a rowing club")]
fn three_activities(context: &TestContext) {
    let catalog = Catalog::new(vec![
        activity(WALK, Category::Nature),
        activity(ESCAPE_ROOM, Category::Action)
            .with_cost(45.0)
            .expect("valid cost")
            .with_capacity(Capacity::new(2, Some(5)).expect("valid capacity")),
        activity(ROWING, Category::Sport)
            .with_cost(15.0)
            .expect("valid cost")
            .with_capacity(Capacity::new(6, Some(12)).expect("valid capacity")),
    ])
    .expect("valid catalog");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[when("I filter for a pair with a budget of 20 CHF")]
fn pair_on_budget(context: &TestContext) {
    apply(
        context,
        ActivityFilter {
            party: Some(PartySize::Pair),
            budget: Some(20.0),
            ..ActivityFilter::default()
        },
    );
}

#[when("I filter for a large group")]
fn large_group(context: &TestContext) {
    apply(
        context,
        ActivityFilter {
            party: Some(PartySize::LargeGroup),
            ..ActivityFilter::default()
        },
    );
}

#[when("I apply no filter")]
fn no_filter(context: &TestContext) {
    apply(context, ActivityFilter::default());
}

#[then("only the free walk remains")]
fn only_walk(context: &TestContext) {
    assert_eq!(remaining(context), BTreeSet::from([WALK]));
}

#[then("the free walk and the rowing club remain")]
fn walk_and_rowing(context: &TestContext) {
    assert_eq!(remaining(context), BTreeSet::from([WALK, ROWING]));
}

#[then("every activity remains")]
fn everything(context: &TestContext) {
    assert_eq!(remaining(context), BTreeSet::from([WALK, ESCAPE_ROOM, ROWING]));
}

#[scenario(path = "tests/features/activity_filter.feature", index = 0)]
fn budget_and_party_combine(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/activity_filter.feature", index = 1)]
fn large_groups_need_room(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/activity_filter.feature", index = 2)]
fn empty_filter_keeps_catalog(context: TestContext) {
    let _ = context;
}
