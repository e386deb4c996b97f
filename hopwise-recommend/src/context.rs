//! Contextual dispatch: adapt the generator to presentation contexts.
//!
//! Context views (venue, event, similar-style) deliberately keep
//! already-rated beverages in the pool so users can compare against drinks
//! they know; open discovery keeps the default exclusion.

use hopwise_core::{Beverage, Rating, Scorer};

use crate::recommend::{RecommendOptions, Recommendations, Recommender};

/// Number of recommendations context views display.
pub const CONTEXT_RECOMMENDATION_COUNT: usize = 5;

/// The presentation context a recommendation request serves.
///
/// # Examples
/// ```
/// use hopwise_recommend::RecommendationContext;
///
/// let context = RecommendationContext::Venue { venue_id: 10 };
/// assert!(matches!(context, RecommendationContext::Venue { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecommendationContext {
    /// Browsing a venue's tap list.
    Venue {
        /// Identifier of the venue being browsed.
        venue_id: u64,
    },
    /// Browsing an event programme.
    Event {
        /// Beverage identifiers featured at the event.
        featured: Vec<u64>,
    },
    /// Exploring beverages similar to a given style.
    SimilarStyle {
        /// Style the results should match.
        style: String,
    },
    /// Open discovery with no narrowing context.
    Discovery,
}

impl<S: Scorer> Recommender<S> {
    /// Recommend for a presentation context.
    ///
    /// Venue, event, and similar-style views delegate with
    /// `count = 5, exclude_rated = false`; discovery keeps the open-search
    /// default of excluding already-rated beverages.
    #[must_use]
    pub fn recommend_for_context(
        &self,
        context: &RecommendationContext,
        ratings: &[Rating],
        catalog: &[Beverage],
    ) -> Recommendations {
        let options = context_options(context);
        match context {
            RecommendationContext::SimilarStyle { style } => {
                let pool: Vec<Beverage> = catalog
                    .iter()
                    .filter(|beverage| beverage.style == *style)
                    .cloned()
                    .collect();
                self.recommend(ratings, &pool, &options)
            }
            _ => self.recommend(ratings, catalog, &options),
        }
    }
}

/// Translate a context into generator options.
fn context_options(context: &RecommendationContext) -> RecommendOptions {
    let options = RecommendOptions::default().with_count(CONTEXT_RECOMMENDATION_COUNT);
    match context {
        RecommendationContext::Venue { venue_id } => {
            options.with_venue(*venue_id).with_exclude_rated(false)
        }
        RecommendationContext::Event { featured } => options
            .with_featured(featured.iter().copied())
            .with_exclude_rated(false),
        RecommendationContext::SimilarStyle { .. } => options.with_exclude_rated(false),
        RecommendationContext::Discovery => options,
    }
}
