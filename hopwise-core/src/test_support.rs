//! Test-only fixtures shared by unit, behaviour, and property tests.

use crate::{Beverage, Rating, Scorer, TasteProfile};

/// Test `Scorer` that scores every candidate `1.0`.
///
/// Useful for exercising pipeline mechanics (filtering, sorting, truncation)
/// without depending on the similarity formula.
#[derive(Debug, Copy, Clone, Default)]
pub struct UnitScorer;

impl Scorer for UnitScorer {
    fn score(&self, _beverage: &Beverage, _profile: &TasteProfile) -> f32 {
        1.0
    }
}

/// Build a beer rating with the given id and score.
#[must_use]
pub fn beer_rating(beverage_id: u64, score: f32) -> Rating {
    Rating::new(beverage_id, score, "beer", "American IPA", "Brewery X").with_abv(6.5)
}

/// Build a beer candidate with the given id.
#[must_use]
pub fn beer_candidate(id: u64) -> Beverage {
    Beverage::new(
        id,
        format!("Test Beer {id}"),
        "beer",
        "American IPA",
        "Brewery X",
        6.5,
    )
}

/// A small mixed catalog covering two types and three producers.
#[must_use]
pub fn sample_catalog() -> Vec<Beverage> {
    vec![
        Beverage::new(1, "Jumping Jack", "beer", "American IPA", "Brewery X", 6.5)
            .with_average_rating(4.6)
            .with_availability([10, 11]),
        Beverage::new(2, "Dry Dock", "beer", "Porter", "Brewery Y", 5.2)
            .with_average_rating(4.0)
            .with_availability([10]),
        Beverage::new(3, "Golden Hour", "beer", "Pilsner", "Brewery Y", 4.8)
            .with_availability([11]),
        Beverage::new(4, "Late Harvest", "wine", "Riesling", "Vineyard Z", 11.5)
            .with_average_rating(4.7),
        Beverage::new(5, "Quiet Orchard", "cider", "Dry Cider", "Orchard Q", 5.5)
            .with_availability([10]),
    ]
}
