//! Score candidate beverages against a taste profile.
//!
//! The `Scorer` trait assigns a similarity score to a
//! [`Beverage`](crate::Beverage) given a user's
//! [`TasteProfile`](crate::TasteProfile).

use crate::{Beverage, TasteProfile};

/// Calculate a similarity score for a candidate beverage.
///
/// Higher scores indicate a better match between the candidate and the
/// user's taste. Implementations must be thread-safe (`Send` + `Sync`) so
/// scorers can run across threads. The method is infallible; implementers
/// must return `0.0` when no information is available.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
///
/// Scores are nominally in `0.0..=1.0`, but the engine's historical formula
/// feeds raw rating-scale weights into the weighted sum, so values above
/// `1.0` are possible and deliberately not clamped away. Use
/// [`Scorer::sanitise`] to apply the finite/non-negative guards.
///
/// # Examples
///
/// ```rust
/// use hopwise_core::{Beverage, Scorer, TasteProfile};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _beverage: &Beverage, _profile: &TasteProfile) -> f32 {
///         1.0
///     }
/// }
///
/// let beverage = Beverage::new(1, "Dry Dock", "beer", "Porter", "Brewery Y", 5.2);
/// let profile = TasteProfile::default_profile();
/// assert_eq!(UnitScorer.score(&beverage, &profile), 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `beverage` according to `profile`.
    fn score(&self, beverage: &Beverage, profile: &TasteProfile) -> f32;

    /// Guard a raw score.
    ///
    /// Returns `0.0` for non-finite values and floors negatives at `0.0`.
    /// There is intentionally no upper clamp; see the trait docs.
    fn sanitise(score: f32) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.max(0.0)
    }
}
