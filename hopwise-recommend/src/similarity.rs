//! Multi-factor similarity scoring between a candidate and a taste profile.
//!
//! The scorer accumulates a weighted contribution per factor and divides by
//! the weight that actually applied. Type, style, producer, and ABV-window
//! weights always count towards the denominator; the attribute-closeness
//! weight only applies when the candidate carries a non-empty attribute
//! vector. Type, style, and producer contributions are raw rating-scale
//! averages, so the quotient is not strictly bounded by `1.0`; the formula
//! is reproduced as-is for compatibility and kept behind the
//! [`Scorer`] trait so a recalibrated model can replace it.

use hopwise_core::{ATTRIBUTE_SCALE, AttributeVector, Beverage, Scorer, TasteProfile};
use thiserror::Error;

/// Errors raised when configuring the similarity scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightsError {
    /// Provided factor weights were unusable.
    #[error("factor weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
}

/// Relative weighting of the similarity factors.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorWeights {
    /// Weight of the beverage-type match factor.
    pub kind: f32,
    /// Weight of the style match factor.
    pub style: f32,
    /// Weight of the producer match factor.
    pub producer: f32,
    /// Weight of the ABV-window factor.
    pub abv_window: f32,
    /// Weight of the attribute-closeness factor.
    pub attributes: f32,
}

impl FactorWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeights`] when any weight is not
    /// finite, any weight is negative, or the total weight is zero.
    pub fn validate(self) -> Result<Self, WeightsError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(WeightsError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_non_negative_values() && self.has_non_zero_total()
    }

    const fn has_finite_values(self) -> bool {
        self.kind.is_finite()
            && self.style.is_finite()
            && self.producer.is_finite()
            && self.abv_window.is_finite()
            && self.attributes.is_finite()
    }

    const fn has_non_negative_values(self) -> bool {
        self.kind >= 0.0_f32
            && self.style >= 0.0_f32
            && self.producer >= 0.0_f32
            && self.abv_window >= 0.0_f32
            && self.attributes >= 0.0_f32
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums weights to ensure a non-zero total"
    )]
    const fn has_non_zero_total(self) -> bool {
        (self.kind + self.style + self.producer + self.abv_window + self.attributes) != 0.0_f32
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            kind: 0.30_f32,
            style: 0.25_f32,
            producer: 0.15_f32,
            abv_window: 0.20_f32,
            attributes: 0.10_f32,
        }
    }
}

/// Scorer weighing type, style, producer, ABV-window, and attribute factors.
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    weights: FactorWeights,
}

impl SimilarityScorer {
    /// Construct a scorer with the engine's standard factor weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer with custom factor weights.
    ///
    /// # Errors
    /// Returns [`WeightsError::InvalidWeights`] when the weights fail
    /// [`FactorWeights::validate`].
    pub fn with_weights(weights: FactorWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }
}

impl Scorer for SimilarityScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "similarity is a weighted sum divided by the applied weight"
    )]
    fn score(&self, beverage: &Beverage, profile: &TasteProfile) -> f32 {
        let weights = self.weights;
        let mut contribution = 0.0_f32;
        let mut applied = 0.0_f32;

        contribution += profile.type_weight(&beverage.kind).unwrap_or(0.0) * weights.kind;
        applied += weights.kind;

        contribution += profile.style_weight(&beverage.style).unwrap_or(0.0) * weights.style;
        applied += weights.style;

        contribution +=
            profile.producer_weight(&beverage.producer).unwrap_or(0.0) * weights.producer;
        applied += weights.producer;

        // The window weight counts whether or not the candidate falls inside.
        applied += weights.abv_window;
        if profile.abv_range.contains(beverage.abv) {
            contribution += weights.abv_window;
        }

        if let Some(vector) = beverage.attributes.as_ref().filter(|vector| !vector.is_empty()) {
            contribution += attribute_closeness(profile, vector) * weights.attributes;
            applied += weights.attributes;
        }

        if applied == 0.0_f32 {
            return 0.0;
        }
        <Self as Scorer>::sanitise(contribution / applied)
    }
}

/// Average per-attribute closeness between the profile and a candidate.
///
/// Each compared attribute contributes `1 - |profile - candidate| / 10`,
/// floored at zero. The caller guarantees the vector is non-empty.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "closeness averages bounded per-attribute distances"
)]
fn attribute_closeness(profile: &TasteProfile, vector: &AttributeVector) -> f32 {
    let mut total = 0.0_f32;
    let mut compared = 0_usize;
    for (attribute, value) in vector.iter() {
        let distance = (profile.attribute(attribute) - value).abs() / ATTRIBUTE_SCALE;
        total += (1.0 - distance).max(0.0);
        compared += 1;
    }
    if compared == 0 {
        return 0.0;
    }
    total / compared as f32
}
