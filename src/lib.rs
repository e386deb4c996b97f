//! Facade crate for the Hopwise beverage recommendation engine.
//!
//! This crate re-exports the core domain types together with the
//! recommendation, contextual-dispatch, and trending entry points.

#![forbid(unsafe_code)]

pub use hopwise_core::{
    AbvRange, Attribute, AttributeValueError, AttributeVector, Beverage, PriceRange, Rating,
    RatingError, Scorer, TasteProfile,
};

pub use hopwise_recommend::{
    FactorWeights, RecommendOptions, RecommendationContext, Recommendations, Recommender,
    ScoredBeverage, SimilarityScorer, TrendingEntry, WeightsError, build_taste_profile,
    recommendation_reasons, trending, trending_at,
};
