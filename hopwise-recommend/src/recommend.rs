//! Candidate filtering, scoring, ordering, and truncation.

use std::cmp::Ordering;
use std::collections::HashSet;

use hopwise_core::{Beverage, Rating, Scorer, TasteProfile};

use crate::reasons::recommendation_reasons;
use crate::similarity::SimilarityScorer;
use crate::build_taste_profile;

/// Default number of recommendations returned.
pub(crate) const DEFAULT_COUNT: usize = 10;

/// Filtering and sizing options for a recommendation request.
///
/// # Examples
/// ```
/// use hopwise_recommend::RecommendOptions;
///
/// let options = RecommendOptions::default().with_count(5).with_venue(10);
/// assert_eq!(options.count, 5);
/// assert!(options.exclude_rated);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendOptions {
    /// Maximum number of recommendations to return.
    pub count: usize,
    /// Restrict candidates to this beverage type, when set.
    pub beverage_type: Option<String>,
    /// Restrict candidates to those available at this venue, when set.
    pub venue: Option<u64>,
    /// Restrict candidates to this event programme of beverage ids, when set.
    pub featured: Option<Vec<u64>>,
    /// Drop candidates the user has already rated.
    pub exclude_rated: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            beverage_type: None,
            venue: None,
            featured: None,
            exclude_rated: true,
        }
    }
}

impl RecommendOptions {
    /// Set the result size while returning `self` for chaining.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Restrict to a beverage type while returning `self` for chaining.
    #[must_use]
    pub fn with_beverage_type(mut self, beverage_type: impl Into<String>) -> Self {
        self.beverage_type = Some(beverage_type.into());
        self
    }

    /// Restrict to a venue while returning `self` for chaining.
    #[must_use]
    pub fn with_venue(mut self, venue: u64) -> Self {
        self.venue = Some(venue);
        self
    }

    /// Restrict to an event programme while returning `self` for chaining.
    #[must_use]
    pub fn with_featured<I>(mut self, featured: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.featured = Some(featured.into_iter().collect());
        self
    }

    /// Set whether already-rated candidates are dropped, returning `self`.
    #[must_use]
    pub fn with_exclude_rated(mut self, exclude_rated: bool) -> Self {
        self.exclude_rated = exclude_rated;
        self
    }
}

/// A candidate with its similarity score and reasons attached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredBeverage {
    /// The underlying catalog record.
    pub beverage: Beverage,
    /// Similarity between the candidate and the user's taste profile.
    pub similarity_score: f32,
    /// Up to two human-readable reasons, or one fallback.
    pub reasons: Vec<String>,
}

/// Result of a recommendation request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendations {
    /// Scored candidates in descending score order, at most `count` long.
    pub recommendations: Vec<ScoredBeverage>,
    /// The taste profile the scores were computed against.
    pub user_preferences: TasteProfile,
    /// Number of candidates that survived filtering and were scored.
    pub total_candidates: usize,
}

/// The recommendation generator.
///
/// Builds a taste profile from the rating history, filters the candidate
/// catalog, scores the survivors with the configured [`Scorer`], and returns
/// the top slice with reasons attached. Each call is a bounded, pure
/// computation over its inputs; nothing is cached between calls.
///
/// # Examples
/// ```
/// use hopwise_core::{Beverage, Rating};
/// use hopwise_recommend::{RecommendOptions, Recommender};
///
/// let ratings = vec![Rating::new(1, 4.5, "beer", "American IPA", "Brewery X")];
/// let catalog = vec![Beverage::new(2, "Dry Dock", "beer", "Porter", "Brewery Y", 5.2)];
/// let result = Recommender::new().recommend(&ratings, &catalog, &RecommendOptions::default());
/// assert_eq!(result.total_candidates, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recommender<S = SimilarityScorer> {
    scorer: S,
}

impl Recommender<SimilarityScorer> {
    /// Construct a generator backed by the standard similarity scorer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Scorer> Recommender<S> {
    /// Construct a generator backed by a custom scorer.
    #[must_use]
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Recommend up to `options.count` candidates for this rating history.
    ///
    /// The exclusion set is drawn from the full history regardless of score,
    /// so even poorly-rated beverages are not re-recommended when
    /// `exclude_rated` is set. Ties in the descending score order preserve
    /// the catalog order of `candidates`.
    #[must_use]
    pub fn recommend(
        &self,
        ratings: &[Rating],
        candidates: &[Beverage],
        options: &RecommendOptions,
    ) -> Recommendations {
        let profile = build_taste_profile(ratings);
        let rated: HashSet<u64> = ratings.iter().map(|rating| rating.beverage_id).collect();

        let mut scored: Vec<ScoredBeverage> = candidates
            .iter()
            .filter(|candidate| retained(candidate, options, &rated))
            .map(|candidate| ScoredBeverage {
                beverage: candidate.clone(),
                similarity_score: self.checked_score(candidate, &profile),
                reasons: recommendation_reasons(&profile, candidate),
            })
            .collect();
        let total_candidates = scored.len();

        scored.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(options.count);
        log::debug!(
            "scored {total_candidates} of {} candidates; returning {}",
            candidates.len(),
            scored.len()
        );

        Recommendations {
            recommendations: scored,
            user_preferences: profile,
            total_candidates,
        }
    }

    /// Score one candidate, guarding against misbehaving scorers.
    fn checked_score(&self, candidate: &Beverage, profile: &TasteProfile) -> f32 {
        let score = self.scorer.score(candidate, profile);
        if score.is_finite() {
            return score;
        }
        log::warn!(
            "scorer returned a non-finite score for beverage {}; treating as zero",
            candidate.id
        );
        debug_assert!(false, "scorer returned a non-finite score");
        0.0
    }
}

/// Apply the rated/type/venue/event filters to one candidate.
fn retained(candidate: &Beverage, options: &RecommendOptions, rated: &HashSet<u64>) -> bool {
    if options.exclude_rated && rated.contains(&candidate.id) {
        return false;
    }
    if let Some(beverage_type) = &options.beverage_type
        && candidate.kind != *beverage_type
    {
        return false;
    }
    if let Some(venue) = options.venue
        && !candidate.available_at.contains(&venue)
    {
        return false;
    }
    if let Some(featured) = &options.featured
        && !featured.contains(&candidate.id)
    {
        return false;
    }
    true
}
