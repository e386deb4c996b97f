//! Property-based tests for the recommendation pipeline.
//!
//! These use `proptest` to assert invariants that must hold for all valid
//! inputs, complementing the scenario and behaviour tests.
//!
//! # Invariants tested
//!
//! - **Idempotence:** identical inputs produce identical ordered output.
//! - **Exclusion law:** with `exclude_rated`, no rated id is recommended.
//! - **Count law:** the result never exceeds `count`, and equals
//!   `min(count, total_candidates)`.
//! - **Default-profile law:** histories with every score below 4.0 build
//!   the exact default profile.
//! - **Score validity:** every similarity score is finite and non-negative.

use std::collections::HashSet;

use hopwise_core::{Beverage, Rating, TasteProfile};
use hopwise_recommend::{RecommendOptions, Recommender, build_taste_profile};
use proptest::prelude::*;

const KINDS: [&str; 3] = ["beer", "wine", "cider"];
const STYLES: [&str; 4] = ["American IPA", "Porter", "Riesling", "Dry Cider"];
const PRODUCERS: [&str; 3] = ["Brewery X", "Brewery Y", "Vineyard Z"];

/// Strategy producing a rating with denormalised fields derived from its id.
fn rating_strategy(max_score: f32) -> impl Strategy<Value = Rating> {
    (0_u64..20, 0.0_f32..=max_score, prop::option::of(0.0_f32..20.0)).prop_map(
        |(id, score, abv)| {
            let mut rating = Rating::new(
                id,
                score,
                KINDS[(id % 3) as usize],
                STYLES[(id % 4) as usize],
                PRODUCERS[(id % 3) as usize],
            );
            if let Some(percent) = abv {
                rating = rating.with_abv(percent);
            }
            rating
        },
    )
}

/// Strategy producing a candidate catalog with unique ids.
fn catalog_strategy() -> impl Strategy<Value = Vec<Beverage>> {
    prop::collection::btree_set(0_u64..30, 0..12).prop_map(|ids| {
        ids.into_iter()
            .map(|id| {
                Beverage::new(
                    id,
                    format!("Candidate {id}"),
                    KINDS[(id % 3) as usize],
                    STYLES[(id % 4) as usize],
                    PRODUCERS[(id % 3) as usize],
                    (id % 12) as f32,
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: recommending twice with identical inputs yields an
    /// identical ordered list.
    #[test]
    fn recommend_is_idempotent(
        ratings in prop::collection::vec(rating_strategy(5.0), 0..15),
        catalog in catalog_strategy(),
        count in 0_usize..12,
    ) {
        let recommender = Recommender::new();
        let options = RecommendOptions::default().with_count(count);
        let first = recommender.recommend(&ratings, &catalog, &options);
        let second = recommender.recommend(&ratings, &catalog, &options);
        prop_assert_eq!(first, second);
    }

    /// Property: no rated beverage id survives the exclusion filter.
    #[test]
    fn rated_ids_are_never_recommended(
        ratings in prop::collection::vec(rating_strategy(5.0), 0..15),
        catalog in catalog_strategy(),
    ) {
        let rated: HashSet<u64> = ratings.iter().map(|rating| rating.beverage_id).collect();
        let result = Recommender::new().recommend(&ratings, &catalog, &RecommendOptions::default());
        for entry in &result.recommendations {
            prop_assert!(
                !rated.contains(&entry.beverage.id),
                "rated beverage {} was recommended",
                entry.beverage.id
            );
        }
    }

    /// Property: the result length is `min(count, total_candidates)`.
    #[test]
    fn result_length_matches_the_count_law(
        ratings in prop::collection::vec(rating_strategy(5.0), 0..15),
        catalog in catalog_strategy(),
        count in 0_usize..12,
    ) {
        let options = RecommendOptions::default().with_count(count);
        let result = Recommender::new().recommend(&ratings, &catalog, &options);
        prop_assert!(result.recommendations.len() <= count);
        prop_assert_eq!(
            result.recommendations.len(),
            count.min(result.total_candidates)
        );
    }

    /// Property: histories with no qualifying rating build the default
    /// profile exactly.
    #[test]
    fn sub_threshold_histories_build_the_default_profile(
        ratings in prop::collection::vec(rating_strategy(3.99), 0..15),
    ) {
        prop_assert_eq!(build_taste_profile(&ratings), TasteProfile::default_profile());
    }

    /// Property: every similarity score is finite and non-negative, and the
    /// output is sorted in descending score order.
    #[test]
    fn scores_are_finite_non_negative_and_sorted(
        ratings in prop::collection::vec(rating_strategy(5.0), 0..15),
        catalog in catalog_strategy(),
    ) {
        let result = Recommender::new().recommend(&ratings, &catalog, &RecommendOptions::default());
        let scores: Vec<f32> = result
            .recommendations
            .iter()
            .map(|entry| entry.similarity_score)
            .collect();
        for score in &scores {
            prop_assert!(score.is_finite(), "score {score} is not finite");
            prop_assert!(*score >= 0.0, "score {score} is negative");
        }
        for pair in scores.windows(2) {
            prop_assert!(pair[0] >= pair[1], "scores are not sorted descending");
        }
    }

    /// Property: every recommendation carries between one and two reasons.
    #[test]
    fn reason_lists_are_bounded(
        ratings in prop::collection::vec(rating_strategy(5.0), 0..15),
        catalog in catalog_strategy(),
    ) {
        let result = Recommender::new().recommend(&ratings, &catalog, &RecommendOptions::default());
        for entry in &result.recommendations {
            prop_assert!(!entry.reasons.is_empty());
            prop_assert!(entry.reasons.len() <= 2);
        }
    }
}
