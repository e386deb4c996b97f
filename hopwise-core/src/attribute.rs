//! Sensory attributes describing a beverage's flavour profile.
//!
//! The enum offers compile-time safety for attribute lookups so the profile
//! builder and the similarity scorer can never drift apart on key names.
//!
//! # Examples
//! ```
//! use hopwise_core::Attribute;
//!
//! assert_eq!(Attribute::HopIntensity.as_str(), "hop_intensity");
//! assert_eq!(Attribute::Maltiness.to_string(), "maltiness");
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Upper bound of the attribute value scale.
pub const ATTRIBUTE_SCALE: f32 = 10.0;

/// A fixed sensory axis rated on a `0.0..=10.0` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    /// Hop-forward aroma and flavour.
    HopIntensity,
    /// Malt body and bready sweetness.
    Maltiness,
    /// Perceived bitterness.
    Bitterness,
    /// Residual sweetness.
    Sweetness,
    /// Warming alcohol presence.
    AlcoholStrength,
    /// Layering and depth of flavour.
    Complexity,
}

impl Attribute {
    /// Every attribute, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::HopIntensity,
        Self::Maltiness,
        Self::Bitterness,
        Self::Sweetness,
        Self::AlcoholStrength,
        Self::Complexity,
    ];

    /// Return the attribute as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use hopwise_core::Attribute;
    ///
    /// assert_eq!(Attribute::Bitterness.as_str(), "bitterness");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HopIntensity => "hop_intensity",
            Self::Maltiness => "maltiness",
            Self::Bitterness => "bitterness",
            Self::Sweetness => "sweetness",
            Self::AlcoholStrength => "alcohol_strength",
            Self::Complexity => "complexity",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hop_intensity" => Ok(Self::HopIntensity),
            "maltiness" => Ok(Self::Maltiness),
            "bitterness" => Ok(Self::Bitterness),
            "sweetness" => Ok(Self::Sweetness),
            "alcohol_strength" => Ok(Self::AlcoholStrength),
            "complexity" => Ok(Self::Complexity),
            _ => Err(format!("unknown attribute '{s}'")),
        }
    }
}

/// Errors returned by [`AttributeVector::try_set`].
#[derive(Debug, Error, PartialEq)]
pub enum AttributeValueError {
    /// A value was outside the `0.0..=10.0` scale or not finite.
    #[error("attribute value must be between 0.0 and 10.0")]
    OutOfRange,
}

/// Per-attribute flavour values in `[0.0, 10.0]`.
///
/// Vectors may be partial; absent attributes are skipped during aggregation
/// and scoring rather than defaulted to zero.
///
/// # Examples
/// ```
/// use hopwise_core::{Attribute, AttributeVector};
///
/// let vector = AttributeVector::new()
///     .with_value(Attribute::HopIntensity, 8.0)
///     .with_value(Attribute::Bitterness, 7.0);
/// assert_eq!(vector.value(Attribute::HopIntensity), Some(8.0));
/// assert!(vector.value(Attribute::Sweetness).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttributeVector {
    values: BTreeMap<Attribute, f32>,
}

impl AttributeVector {
    /// Construct an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for an attribute, if present.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> Option<f32> {
        self.values.get(&attribute).copied()
    }

    /// Insert or update an attribute value.
    ///
    /// Values are clamped into `0.0..=10.0`; non-finite values become `0.0`.
    pub fn set(&mut self, attribute: Attribute, value: f32) {
        let clamped = if value.is_finite() {
            value.clamp(0.0, ATTRIBUTE_SCALE)
        } else {
            0.0
        };
        self.values.insert(attribute, clamped);
    }

    /// Insert an attribute value, rejecting out-of-range input.
    ///
    /// # Errors
    /// Returns [`AttributeValueError::OutOfRange`] when `value` is not finite
    /// or lies outside `0.0..=10.0`.
    pub fn try_set(&mut self, attribute: Attribute, value: f32) -> Result<(), AttributeValueError> {
        if !value.is_finite() || !(0.0..=ATTRIBUTE_SCALE).contains(&value) {
            return Err(AttributeValueError::OutOfRange);
        }
        self.values.insert(attribute, value);
        Ok(())
    }

    /// Add an attribute value while returning `self` for chaining.
    #[must_use]
    pub fn with_value(mut self, attribute: Attribute, value: f32) -> Self {
        self.set(attribute, value);
        self
    }

    /// Iterate over the stored attribute/value pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f32)> + '_ {
        self.values.iter().map(|(&attribute, &value)| (attribute, value))
    }

    /// Return the number of stored attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Report whether the vector holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Attribute::Complexity.to_string(), Attribute::Complexity.as_str());
    }

    #[test]
    fn parsing_round_trips_all_attributes() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_str(attribute.as_str()), Ok(attribute));
        }
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Attribute::from_str("fizziness").unwrap_err();
        assert!(err.contains("unknown attribute"));
    }

    #[test]
    fn set_clamps_out_of_range() {
        let mut vector = AttributeVector::new();
        vector.set(Attribute::HopIntensity, 12.5);
        assert_eq!(vector.value(Attribute::HopIntensity), Some(10.0));
        vector.set(Attribute::Sweetness, -3.0);
        assert_eq!(vector.value(Attribute::Sweetness), Some(0.0));
    }

    #[test]
    fn try_set_rejects_out_of_range() {
        let mut vector = AttributeVector::new();
        assert!(vector.try_set(Attribute::Maltiness, 10.1).is_err());
        assert!(vector.try_set(Attribute::Maltiness, f32::NAN).is_err());
        assert!(vector.value(Attribute::Maltiness).is_none());
    }

    #[test]
    fn empty_vector_reports_empty() {
        let vector = AttributeVector::new();
        assert!(vector.is_empty());
        assert_eq!(vector.len(), 0);
    }
}
