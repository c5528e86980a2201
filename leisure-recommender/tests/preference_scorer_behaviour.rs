#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for preference scoring.

use std::cell::RefCell;

use leisure_core::test_support::activity;
use leisure_core::{
    ActivityId, Catalog, Category, Ranking, Rating, RecommendError, RecommendRequest,
    Recommender, ScoredActivity, UserFeedback,
};
use leisure_recommender::PreferenceScorer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const FIRST_HIKE: ActivityId = 1;
const SECOND_HIKE: ActivityId = 2;
const MUSEUM: ActivityId = 3;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    scorer: PreferenceScorer,
    catalog: RefCell<Option<Catalog>>,
    feedback: RefCell<UserFeedback>,
    result: RefCell<Option<Result<Ranking, RecommendError>>>,
    baseline: RefCell<Vec<ScoredActivity>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        scorer: PreferenceScorer::default(),
        catalog: RefCell::new(None),
        feedback: RefCell::new(UserFeedback::new()),
        result: RefCell::new(None),
        baseline: RefCell::new(Vec::new()),
    }
}

fn with_catalog<T>(context: &TestContext, f: impl FnOnce(&Catalog) -> T) -> T {
    let catalog = context.catalog.borrow();
    f(catalog.as_ref().expect("catalog set up"))
}

fn current_scores(context: &TestContext) -> Vec<ScoredActivity> {
    with_catalog(context, |catalog| {
        context
            .scorer
            .score_catalog(catalog, &context.feedback.borrow())
            .expect("catalog scores")
    })
}

fn score_of(scores: &[ScoredActivity], id: ActivityId) -> f32 {
    scores
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.score)
        .expect("activity scored")
}

fn ranking(context: &TestContext) -> Ranking {
    context
        .result
        .borrow()
        .clone()
        .expect("ranking requested")
        .expect("ranking succeeded")
}

#[given("a catalog with two cheap hikes and an expensive museum")]
fn hikes_and_museum(context: &TestContext) {
    let catalog = Catalog::new(vec![
        activity(FIRST_HIKE, Category::Hiking)
            .with_cost(5.0)
            .expect("valid cost"),
        activity(SECOND_HIKE, Category::Hiking)
            .with_cost(8.0)
            .expect("valid cost"),
        activity(MUSEUM, Category::Culture)
            .with_cost(40.0)
            .expect("valid cost"),
    ])
    .expect("valid catalog");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[given("the visitor liked the first hike")]
fn liked_first_hike(context: &TestContext) {
    context.feedback.borrow_mut().rate(FIRST_HIKE, Rating::Liked);
}

#[given("the visitor disliked the museum")]
fn disliked_museum(context: &TestContext) {
    context.feedback.borrow_mut().rate(MUSEUM, Rating::Disliked);
}

#[given("the visitor rated every activity")]
fn rated_everything(context: &TestContext) {
    let mut feedback = context.feedback.borrow_mut();
    feedback.rate(FIRST_HIKE, Rating::Liked);
    feedback.rate(SECOND_HIKE, Rating::Disliked);
    feedback.rate(MUSEUM, Rating::Liked);
}

#[given("I record the catalog scores")]
fn record_scores(context: &TestContext) {
    *context.baseline.borrow_mut() = current_scores(context);
}

#[when("I rank recommendations")]
fn rank(context: &TestContext) {
    let result = with_catalog(context, |catalog| {
        context
            .scorer
            .recommend(catalog, &context.feedback.borrow(), &RecommendRequest::new())
    });
    *context.result.borrow_mut() = Some(result);
}

#[when("the visitor also dislikes the second hike")]
fn dislike_second_hike(context: &TestContext) {
    context
        .feedback
        .borrow_mut()
        .rate(SECOND_HIKE, Rating::Disliked);
}

#[then("the second hike ranks above the museum")]
fn second_hike_first(context: &TestContext) {
    assert_eq!(
        ranking(context).ids().collect::<Vec<_>>(),
        vec![SECOND_HIKE, MUSEUM]
    );
}

#[then("no rated activity is ranked")]
fn rated_excluded(context: &TestContext) {
    let feedback = context.feedback.borrow();
    assert!(ranking(context).ids().all(|id| !feedback.is_rated(id)));
}

#[then("both the second hike and the museum score lower than before")]
fn both_lower(context: &TestContext) {
    let before = context.baseline.borrow();
    let after = current_scores(context);
    for id in [SECOND_HIKE, MUSEUM] {
        assert!(
            score_of(&after, id) < score_of(&before, id),
            "activity {id} should lose score after the dislike"
        );
    }
}

#[then("the second hike now scores below the museum")]
fn second_hike_below_museum(context: &TestContext) {
    let after = current_scores(context);
    assert!(score_of(&after, SECOND_HIKE) < score_of(&after, MUSEUM));
}

#[then("insufficient preference data is reported")]
fn insufficient(context: &TestContext) {
    let result = context.result.borrow();
    assert!(matches!(
        result.as_ref(),
        Some(Err(RecommendError::InsufficientPreferenceData))
    ));
}

#[then("the ranking is empty")]
fn empty_ranking(context: &TestContext) {
    assert!(ranking(context).is_empty());
}

#[scenario(path = "tests/features/preference_scorer.feature", index = 0)]
fn liked_hike_promotes_hike(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/preference_scorer.feature", index = 1)]
fn dislike_demotes_similar(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/preference_scorer.feature", index = 2)]
fn dislikes_alone_insufficient(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/preference_scorer.feature", index = 3)]
fn fully_rated_catalog_is_empty(context: TestContext) {
    let _ = context;
}
