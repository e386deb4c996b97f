//! Taste profiles: the aggregated, normalised signature of a user's
//! highly-rated history.
//!
//! Profiles are produced by the engine's profile builder and consumed by
//! scorers. The maps use `BTreeMap` so iteration order, and therefore the
//! highest-weighted-type tie-break, is deterministic.

use std::collections::BTreeMap;

use crate::Attribute;

/// Default community profile used when a user has no qualifying ratings.
const DEFAULT_ATTRIBUTE_VALUE: f32 = 5.0;

/// An alcohol-by-volume tolerance window.
///
/// The window only ever widens: each observation pushes `min` down to at
/// least one point below it and `max` up to at least one point above it,
/// and nothing ever narrows or resets the bounds.
///
/// # Examples
/// ```
/// use hopwise_core::AbvRange;
///
/// let mut range = AbvRange::new(0.0, 15.0);
/// range.widen(16.2);
/// assert!(range.contains(17.0));
/// assert!(range.contains(0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbvRange {
    /// Inclusive lower bound in percent.
    pub min: f32,
    /// Inclusive upper bound in percent.
    pub max: f32,
}

impl AbvRange {
    /// Construct a window from inclusive bounds.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Report whether `abv` lies within the window.
    #[must_use]
    pub fn contains(&self, abv: f32) -> bool {
        (self.min..=self.max).contains(&abv)
    }

    /// Widen the window to cover `abv` with one point of slack either side.
    ///
    /// Widening is monotonic: the bounds never move back towards each other.
    #[expect(
        clippy::float_arithmetic,
        reason = "widening offsets the observation by one point each side"
    )]
    pub fn widen(&mut self, abv: f32) {
        self.min = self.min.min(abv - 1.0);
        self.max = self.max.max(abv + 1.0);
    }
}

/// A price tolerance window, carried on the profile but unused by scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceRange {
    /// Inclusive lower bound.
    pub min: f32,
    /// Inclusive upper bound.
    pub max: f32,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0.0, max: 50.0 }
    }
}

/// A user's aggregated taste signature.
///
/// Type, style, and producer weights are average scores over the user's
/// qualifying (≥ 4.0) ratings, so they live on the raw `0.0..=5.0` rating
/// scale rather than being normalised probabilities.
///
/// # Examples
/// ```
/// use hopwise_core::TasteProfile;
///
/// let profile = TasteProfile::default_profile();
/// assert_eq!(profile.type_weight("beer"), Some(1.0));
/// assert_eq!(profile.abv_range.min, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TasteProfile {
    /// Average score per beverage type.
    pub beverage_types: BTreeMap<String, f32>,
    /// Average score per style.
    pub styles: BTreeMap<String, f32>,
    /// Average score per producer.
    pub producers: BTreeMap<String, f32>,
    /// Score-weighted average per sensory attribute; all six keys are always
    /// present, with `0.0` for attributes no qualifying rating carried.
    pub attributes: BTreeMap<Attribute, f32>,
    /// ABV tolerance window.
    pub abv_range: AbvRange,
    /// Price tolerance window; carried for callers, ignored by scoring.
    pub price_range: PriceRange,
}

impl TasteProfile {
    /// The fixed fallback profile for users with no qualifying ratings.
    ///
    /// # Examples
    /// ```
    /// use hopwise_core::{Attribute, TasteProfile};
    ///
    /// let profile = TasteProfile::default_profile();
    /// assert_eq!(profile.attribute(Attribute::Complexity), 5.0);
    /// assert!(profile.styles.is_empty());
    /// ```
    #[must_use]
    pub fn default_profile() -> Self {
        Self {
            beverage_types: BTreeMap::from([("beer".to_owned(), 1.0)]),
            styles: BTreeMap::new(),
            producers: BTreeMap::new(),
            attributes: Attribute::ALL
                .into_iter()
                .map(|attribute| (attribute, DEFAULT_ATTRIBUTE_VALUE))
                .collect(),
            abv_range: AbvRange::new(3.0, 10.0),
            price_range: PriceRange::default(),
        }
    }

    /// Return the weight for a beverage type, if present.
    #[must_use]
    pub fn type_weight(&self, kind: &str) -> Option<f32> {
        self.beverage_types.get(kind).copied()
    }

    /// Return the weight for a style, if present.
    #[must_use]
    pub fn style_weight(&self, style: &str) -> Option<f32> {
        self.styles.get(style).copied()
    }

    /// Return the weight for a producer, if present.
    #[must_use]
    pub fn producer_weight(&self, producer: &str) -> Option<f32> {
        self.producers.get(producer).copied()
    }

    /// Return the aggregated value for a sensory attribute.
    ///
    /// All six attributes are present on well-formed profiles; a missing key
    /// reads as `0.0` rather than panicking.
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> f32 {
        self.attributes.get(&attribute).copied().unwrap_or(0.0)
    }

    /// Return the single highest-weighted beverage type, if any.
    ///
    /// Ties resolve to the lexicographically first type: the scan walks the
    /// map in key order and only a strictly greater weight displaces the
    /// current leader.
    #[must_use]
    pub fn top_beverage_type(&self) -> Option<&str> {
        let mut top: Option<(&str, f32)> = None;
        for (kind, &weight) in &self.beverage_types {
            match top {
                Some((_, best)) if weight <= best => {}
                _ => top = Some((kind, weight)),
            }
        }
        top.map(|(kind, _)| kind)
    }
}

impl Default for TasteProfile {
    fn default() -> Self {
        Self::default_profile()
    }
}
