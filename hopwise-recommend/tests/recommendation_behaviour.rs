//! End-to-end behaviour of the recommendation pipeline.

use chrono::Utc;
use hopwise_core::{Beverage, Rating, TasteProfile};
use hopwise_recommend::{
    FALLBACK_REASON, RecommendOptions, Recommender, build_taste_profile, trending_at,
};
use rstest::rstest;

fn ipa_history(score: f32) -> Vec<Rating> {
    vec![Rating::new(1, score, "beer", "American IPA", "Brewery X").with_abv(6.5)]
}

fn ipa_candidate() -> Beverage {
    Beverage::new(9, "Jumping Jack", "beer", "American IPA", "Brewery X", 6.5)
}

#[rstest]
fn matching_candidate_scores_highly_with_reasons() {
    let result = Recommender::new().recommend(
        &ipa_history(4.5),
        &[ipa_candidate()],
        &RecommendOptions::default(),
    );
    assert_eq!(result.recommendations.len(), 1);
    let entry = &result.recommendations[0];
    assert!(entry.similarity_score > 0.8);
    assert!(entry.reasons.contains(&"You enjoy beers".to_owned()));
    assert_eq!(entry.reasons.len(), 2);
}

#[rstest]
fn moderate_history_surfaces_the_abv_reason() {
    // At exactly 4.0 the style and producer rules stay below their strict
    // thresholds, so the ABV rule claims the second slot.
    let result = Recommender::new().recommend(
        &ipa_history(4.0),
        &[ipa_candidate()],
        &RecommendOptions::default(),
    );
    let entry = &result.recommendations[0];
    assert_eq!(
        entry.reasons,
        vec![
            "You enjoy beers".to_owned(),
            "ABV (6.5%) matches your preference".to_owned(),
        ]
    );
}

#[rstest]
fn unmatched_wine_gets_zero_score_and_the_fallback_reason() {
    let candidate = Beverage::new(4, "Late Harvest", "wine", "Riesling", "Vineyard Z", 20.0);
    let result = Recommender::new().recommend(&[], &[candidate], &RecommendOptions::default());
    let entry = &result.recommendations[0];
    assert_eq!(entry.similarity_score, 0.0);
    assert_eq!(entry.reasons, vec![FALLBACK_REASON.to_owned()]);
}

#[rstest]
fn sub_threshold_history_builds_the_default_profile() {
    let ratings = vec![
        Rating::new(1, 3.9, "beer", "Porter", "Brewery Y"),
        Rating::new(2, 1.0, "wine", "Merlot", "Vineyard Z"),
    ];
    assert_eq!(build_taste_profile(&ratings), TasteProfile::default_profile());
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(3, 3)]
#[case(10, 5)]
fn count_caps_the_result(#[case] count: usize, #[case] expected: usize) {
    let catalog: Vec<Beverage> = (1..=5)
        .map(|id| Beverage::new(id, format!("Beer {id}"), "beer", "Pale Ale", "Brewery X", 5.0))
        .collect();
    let options = RecommendOptions::default().with_count(count);
    let result = Recommender::new().recommend(&[], &catalog, &options);
    assert_eq!(result.recommendations.len(), expected);
    assert_eq!(result.total_candidates, 5);
}

#[rstest]
fn repeated_calls_return_identical_lists() {
    let ratings = ipa_history(4.5);
    let catalog: Vec<Beverage> = (2..=8)
        .map(|id| Beverage::new(id, format!("Beer {id}"), "beer", "Pale Ale", "Brewery X", 5.0))
        .collect();
    let recommender = Recommender::new();
    let options = RecommendOptions::default();
    let first = recommender.recommend(&ratings, &catalog, &options);
    let second = recommender.recommend(&ratings, &catalog, &options);
    assert_eq!(first, second);
}

#[rstest]
fn trending_ranks_volume_over_bare_average() {
    let now = Utc::now();
    let rate = |beverage_id: u64, score: f32| {
        Rating::new(beverage_id, score, "beer", "American IPA", "Brewery X").with_rated_at(now)
    };
    let ratings = vec![rate(1, 5.0), rate(1, 4.0), rate(2, 5.0)];
    let top = trending_at(&ratings, 30, now);
    assert_eq!(top[0].beverage_id, 1);
    assert!((top[0].trending_score - 4.94).abs() < 0.01);
    assert!((top[1].trending_score - 3.47).abs() < 0.01);
}
