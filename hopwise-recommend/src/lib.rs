//! Recommendation engine for Hopwise beverage discovery.
//!
//! The crate provides the complete scoring pipeline:
//! - **Profile building** aggregates a user's rating history into a
//!   [`TasteProfile`](hopwise_core::TasteProfile), keeping only ratings of
//!   4.0 stars and above.
//! - **Similarity scoring** weighs type, style, producer, ABV-window, and
//!   flavour-attribute agreement into a single score via
//!   [`SimilarityScorer`], which implements the
//!   [`Scorer`](hopwise_core::Scorer) trait so callers can substitute a
//!   recalibrated model.
//! - **Recommendation generation** filters a candidate catalog, scores the
//!   survivors, attaches human-readable reasons, and returns the top slice
//!   in descending score order.
//! - **Contextual dispatch** adapts the generator to venue, event,
//!   similar-style, and open-discovery views.
//! - **Trending aggregation** ranks beverages by a recency-weighted
//!   popularity score independent of any one user's taste.
//!
//! # Examples
//!
//! ```
//! use hopwise_core::{Beverage, Rating};
//! use hopwise_recommend::{RecommendOptions, Recommender};
//!
//! let ratings = vec![Rating::new(1, 4.5, "beer", "American IPA", "Brewery X").with_abv(6.5)];
//! let catalog = vec![Beverage::new(9, "Jumping Jack", "beer", "American IPA", "Brewery X", 6.5)];
//!
//! let recommender = Recommender::new();
//! let result = recommender.recommend(&ratings, &catalog, &RecommendOptions::default());
//! assert_eq!(result.recommendations.len(), 1);
//! assert!(result.recommendations[0].similarity_score > 0.8);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod context;
mod profile;
mod reasons;
mod recommend;
mod similarity;
mod trending;

pub use context::{CONTEXT_RECOMMENDATION_COUNT, RecommendationContext};
pub use profile::build_taste_profile;
pub use reasons::{FALLBACK_REASON, MAX_REASONS, recommendation_reasons};
pub use recommend::{RecommendOptions, Recommendations, Recommender, ScoredBeverage};
pub use similarity::{FactorWeights, SimilarityScorer, WeightsError};
pub use trending::{
    DEFAULT_TRENDING_WINDOW_DAYS, TRENDING_LIMIT, TrendingEntry, trending, trending_at,
};
