//! Build taste profiles from rating history.
//!
//! Only ratings of [`QUALIFYING_SCORE`] and above shape the profile; the
//! count of qualifying ratings is the single normalisation divisor for every
//! weighted field. Histories with no qualifying ratings fall back to
//! [`TasteProfile::default_profile`].

use std::collections::BTreeMap;

use hopwise_core::{AbvRange, Attribute, PriceRange, Rating, TasteProfile};

/// Minimum score a rating needs to influence the profile.
pub(crate) const QUALIFYING_SCORE: f32 = 4.0;

/// Seed window widened around each qualifying rating's ABV.
const ABV_SEED: AbvRange = AbvRange::new(0.0, 15.0);

/// Aggregate a rating history into a [`TasteProfile`].
///
/// Type, style, and producer weights are the average score of the user's
/// qualifying ratings carrying that value. Attribute values are
/// score-weighted averages over the same divisor, so attributes recorded on
/// only some ratings are diluted rather than renormalised. The ABV window
/// starts at `0..=15` and widens one point past each observed ABV, never
/// narrowing.
///
/// Degenerate input is not an error: an empty history, or one with no
/// rating at or above 4.0, yields the default profile.
///
/// # Examples
/// ```
/// use hopwise_core::Rating;
/// use hopwise_recommend::build_taste_profile;
///
/// let ratings = vec![
///     Rating::new(1, 4.5, "beer", "American IPA", "Brewery X").with_abv(6.5),
///     Rating::new(2, 2.0, "wine", "Merlot", "Vineyard Z"),
/// ];
/// let profile = build_taste_profile(&ratings);
/// assert_eq!(profile.type_weight("beer"), Some(4.5));
/// assert!(profile.type_weight("wine").is_none());
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "profile aggregation averages rating-scale sums over a small count"
)]
#[must_use]
pub fn build_taste_profile(ratings: &[Rating]) -> TasteProfile {
    let qualifying: Vec<&Rating> = ratings
        .iter()
        .filter(|rating| rating.score >= QUALIFYING_SCORE)
        .collect();
    if qualifying.is_empty() {
        return TasteProfile::default_profile();
    }
    let divisor = qualifying.len() as f32;

    let mut beverage_types: BTreeMap<String, f32> = BTreeMap::new();
    let mut styles: BTreeMap<String, f32> = BTreeMap::new();
    let mut producers: BTreeMap<String, f32> = BTreeMap::new();
    let mut attributes: BTreeMap<Attribute, f32> =
        Attribute::ALL.into_iter().map(|attribute| (attribute, 0.0)).collect();
    let mut abv_range = ABV_SEED;

    for rating in &qualifying {
        *beverage_types.entry(rating.kind.clone()).or_insert(0.0) += rating.score;
        *styles.entry(rating.style.clone()).or_insert(0.0) += rating.score;
        *producers.entry(rating.producer.clone()).or_insert(0.0) += rating.score;
        if let Some(vector) = &rating.attributes {
            for (attribute, value) in vector.iter() {
                if let Some(sum) = attributes.get_mut(&attribute) {
                    *sum += value * rating.score;
                }
            }
        }
        if let Some(abv) = rating.abv {
            abv_range.widen(abv);
        }
    }

    for weight in beverage_types.values_mut() {
        *weight /= divisor;
    }
    for weight in styles.values_mut() {
        *weight /= divisor;
    }
    for weight in producers.values_mut() {
        *weight /= divisor;
    }
    for value in attributes.values_mut() {
        *value /= divisor;
    }

    TasteProfile {
        beverage_types,
        styles,
        producers,
        attributes,
        abv_range,
        price_range: PriceRange::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopwise_core::AttributeVector;
    use rstest::rstest;

    const TOLERANCE: f32 = 1e-6;

    fn rated(score: f32) -> Rating {
        Rating::new(1, score, "beer", "American IPA", "Brewery X")
    }

    #[test]
    fn empty_history_yields_default_profile() {
        assert_eq!(build_taste_profile(&[]), TasteProfile::default_profile());
    }

    #[rstest]
    #[case(&[3.9])]
    #[case(&[0.0, 2.5, 3.99])]
    fn sub_threshold_history_yields_default_profile(#[case] scores: &[f32]) {
        let ratings: Vec<Rating> = scores.iter().map(|&score| rated(score)).collect();
        assert_eq!(build_taste_profile(&ratings), TasteProfile::default_profile());
    }

    #[test]
    fn weights_average_qualifying_scores_only() {
        let ratings = vec![
            rated(4.0),
            rated(5.0),
            Rating::new(2, 3.0, "beer", "American IPA", "Brewery X"),
        ];
        let profile = build_taste_profile(&ratings);
        assert!((profile.type_weight("beer").unwrap_or(0.0) - 4.5).abs() < TOLERANCE);
        assert!((profile.style_weight("American IPA").unwrap_or(0.0) - 4.5).abs() < TOLERANCE);
        assert!((profile.producer_weight("Brewery X").unwrap_or(0.0) - 4.5).abs() < TOLERANCE);
    }

    #[test]
    fn divisor_spans_all_qualifying_ratings() {
        // The style appears on one of two qualifying ratings, so its weight
        // is halved rather than renormalised.
        let ratings = vec![
            Rating::new(1, 4.0, "beer", "Porter", "Brewery Y"),
            Rating::new(2, 4.0, "beer", "Pilsner", "Brewery Y"),
        ];
        let profile = build_taste_profile(&ratings);
        assert!((profile.style_weight("Porter").unwrap_or(0.0) - 2.0).abs() < TOLERANCE);
        assert!((profile.type_weight("beer").unwrap_or(0.0) - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn attributes_are_score_weighted_over_the_shared_divisor() {
        let vector = AttributeVector::new().with_value(Attribute::HopIntensity, 8.0);
        let ratings = vec![
            Rating::new(1, 4.0, "beer", "American IPA", "Brewery X").with_attributes(vector),
            Rating::new(2, 4.0, "beer", "Porter", "Brewery Y"),
        ];
        let profile = build_taste_profile(&ratings);
        // 8.0 * 4.0 / 2 qualifying ratings.
        assert!((profile.attribute(Attribute::HopIntensity) - 16.0).abs() < TOLERANCE);
        assert!((profile.attribute(Attribute::Maltiness) - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn abv_window_seeds_and_widens() {
        let ratings = vec![rated(4.5).with_abv(6.5)];
        let profile = build_taste_profile(&ratings);
        assert_eq!(profile.abv_range, AbvRange::new(0.0, 15.0));

        let ratings = vec![rated(4.5).with_abv(16.0)];
        let profile = build_taste_profile(&ratings);
        assert_eq!(profile.abv_range, AbvRange::new(0.0, 17.0));
    }

    #[test]
    fn missing_abv_leaves_seed_window() {
        let ratings = vec![rated(4.5)];
        let profile = build_taste_profile(&ratings);
        assert_eq!(profile.abv_range, AbvRange::new(0.0, 15.0));
    }

    #[test]
    fn price_window_is_carried_unchanged() {
        let profile = build_taste_profile(&[rated(4.5)]);
        assert_eq!(profile.price_range, PriceRange::default());
    }
}
