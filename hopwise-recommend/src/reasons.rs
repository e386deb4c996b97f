//! Human-readable reasons attached to each recommendation.
//!
//! Reasons come from a fixed, ordered decision table so the priority order
//! cannot drift between call sites: each rule is checked once in sequence,
//! the first [`MAX_REASONS`] matches are kept, and a single fallback covers
//! candidates no rule matched.

use hopwise_core::{Beverage, TasteProfile};

/// Maximum number of reasons attached to a recommendation.
pub const MAX_REASONS: usize = 2;

/// Reason shown when no rule matched the candidate.
pub const FALLBACK_REASON: &str = "Popular choice among users with similar tastes";

/// Style weight above which the style rule fires.
const STYLE_AFFINITY: f32 = 4.0;

/// Producer weight above which the producer rule fires.
const PRODUCER_AFFINITY: f32 = 4.0;

/// Community average at or above which the community rule fires.
const COMMUNITY_FAVOURITE: f32 = 4.5;

/// A single predicate→string rule in the decision table.
type ReasonRule = fn(&TasteProfile, &Beverage) -> Option<String>;

/// The decision table, in priority order.
const RULES: [ReasonRule; 5] = [
    favourite_type,
    highly_rated_style,
    enjoyed_producer,
    abv_in_window,
    community_favourite,
];

/// Explain why a candidate suits the profile.
///
/// Returns at most [`MAX_REASONS`] strings in table order, or exactly one
/// fallback string when no rule fires.
///
/// # Examples
/// ```
/// use hopwise_core::{Beverage, TasteProfile};
/// use hopwise_recommend::recommendation_reasons;
///
/// let profile = TasteProfile::default_profile();
/// let candidate = Beverage::new(9, "Jumping Jack", "beer", "American IPA", "Brewery X", 6.5);
/// let reasons = recommendation_reasons(&profile, &candidate);
/// assert_eq!(reasons[0], "You enjoy beers");
/// ```
#[must_use]
pub fn recommendation_reasons(profile: &TasteProfile, beverage: &Beverage) -> Vec<String> {
    let reasons: Vec<String> = RULES
        .iter()
        .filter_map(|rule| rule(profile, beverage))
        .take(MAX_REASONS)
        .collect();
    if reasons.is_empty() {
        return vec![FALLBACK_REASON.to_owned()];
    }
    reasons
}

fn favourite_type(profile: &TasteProfile, beverage: &Beverage) -> Option<String> {
    (profile.top_beverage_type() == Some(beverage.kind.as_str()))
        .then(|| format!("You enjoy {}s", beverage.kind))
}

fn highly_rated_style(profile: &TasteProfile, beverage: &Beverage) -> Option<String> {
    profile
        .style_weight(&beverage.style)
        .is_some_and(|weight| weight > STYLE_AFFINITY)
        .then(|| format!("You've rated {} highly before", beverage.style))
}

fn enjoyed_producer(profile: &TasteProfile, beverage: &Beverage) -> Option<String> {
    profile
        .producer_weight(&beverage.producer)
        .is_some_and(|weight| weight > PRODUCER_AFFINITY)
        .then(|| format!("You've enjoyed {} beverages", beverage.producer))
}

fn abv_in_window(profile: &TasteProfile, beverage: &Beverage) -> Option<String> {
    profile
        .abv_range
        .contains(beverage.abv)
        .then(|| format!("ABV ({}%) matches your preference", beverage.abv))
}

fn community_favourite(_profile: &TasteProfile, beverage: &Beverage) -> Option<String> {
    beverage
        .average_rating
        .filter(|&average| average >= COMMUNITY_FAVOURITE)
        .map(|average| format!("Highly rated by community ({average}/5)"))
}
