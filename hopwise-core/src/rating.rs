//! User ratings of beverages.
//!
//! Ratings carry denormalised copies of the rated beverage's type, style,
//! producer, ABV, and attribute vector as they stood at rating time, so the
//! profile builder never has to join against a catalog.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::AttributeVector;

/// Upper bound of the rating scale.
pub const RATING_SCALE: f32 = 5.0;

/// Errors returned by [`Rating::try_new`].
#[derive(Debug, Error, PartialEq)]
pub enum RatingError {
    /// The score was outside the `0.0..=5.0` scale or not finite.
    #[error("rating score must be between 0.0 and 5.0")]
    ScoreOutOfRange,
}

/// A user's numeric score for a specific beverage.
///
/// # Examples
/// ```
/// use hopwise_core::Rating;
///
/// let rating = Rating::new(9, 4.5, "beer", "American IPA", "Brewery X").with_abv(6.5);
/// assert_eq!(rating.beverage_id, 9);
/// assert_eq!(rating.abv, Some(6.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    /// Identifier of the rated beverage.
    pub beverage_id: u64,
    /// Score on the `0.0..=5.0` scale.
    pub score: f32,
    /// Beverage type at rating time, e.g. `"beer"`.
    pub kind: String,
    /// Beverage style at rating time, e.g. `"American IPA"`.
    pub style: String,
    /// Producer name at rating time.
    pub producer: String,
    /// Alcohol by volume in percent, when recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub abv: Option<f32>,
    /// Flavour attribute vector, when recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Option<AttributeVector>,
    /// When the rating was made; undated ratings never count as recent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rated_at: Option<DateTime<Utc>>,
}

impl Rating {
    /// Construct a rating with the required fields.
    ///
    /// The score is clamped into `0.0..=5.0`; non-finite scores become `0.0`.
    #[must_use]
    pub fn new(
        beverage_id: u64,
        score: f32,
        kind: impl Into<String>,
        style: impl Into<String>,
        producer: impl Into<String>,
    ) -> Self {
        let clamped = if score.is_finite() {
            score.clamp(0.0, RATING_SCALE)
        } else {
            0.0
        };
        Self {
            beverage_id,
            score: clamped,
            kind: kind.into(),
            style: style.into(),
            producer: producer.into(),
            abv: None,
            attributes: None,
            rated_at: None,
        }
    }

    /// Construct a rating, rejecting out-of-range scores.
    ///
    /// # Errors
    /// Returns [`RatingError::ScoreOutOfRange`] when `score` is not finite or
    /// lies outside `0.0..=5.0`.
    pub fn try_new(
        beverage_id: u64,
        score: f32,
        kind: impl Into<String>,
        style: impl Into<String>,
        producer: impl Into<String>,
    ) -> Result<Self, RatingError> {
        if !score.is_finite() || !(0.0..=RATING_SCALE).contains(&score) {
            return Err(RatingError::ScoreOutOfRange);
        }
        Ok(Self::new(beverage_id, score, kind, style, producer))
    }

    /// Record the beverage's ABV while returning `self` for chaining.
    #[must_use]
    pub fn with_abv(mut self, abv: f32) -> Self {
        self.abv = Some(abv);
        self
    }

    /// Attach a flavour attribute vector while returning `self` for chaining.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeVector) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Record when the rating was made while returning `self` for chaining.
    #[must_use]
    pub fn with_rated_at(mut self, rated_at: DateTime<Utc>) -> Self {
        self.rated_at = Some(rated_at);
        self
    }
}
