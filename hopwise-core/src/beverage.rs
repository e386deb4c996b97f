//! Candidate beverages evaluated for recommendation.

use crate::AttributeVector;

/// A beverage from the catalog, not yet scored.
///
/// `available_at` lists the venue identifiers that stock the beverage and is
/// consulted by the venue filter. Catalog fixtures deserialise directly into
/// this type when the `serde` feature is enabled.
///
/// # Examples
/// ```
/// use hopwise_core::Beverage;
///
/// let beverage = Beverage::new(9, "Jumping Jack", "beer", "American IPA", "Brewery X", 6.5)
///     .with_average_rating(4.6);
/// assert_eq!(beverage.id, 9);
/// assert_eq!(beverage.average_rating, Some(4.6));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beverage {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Beverage type, e.g. `"beer"`.
    pub kind: String,
    /// Style within the type, e.g. `"American IPA"`.
    pub style: String,
    /// Producer name.
    pub producer: String,
    /// Alcohol by volume in percent.
    pub abv: f32,
    /// Flavour attribute vector, when the catalog provides one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Option<AttributeVector>,
    /// Community average rating on the `0.0..=5.0` scale, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub average_rating: Option<f32>,
    /// Venue identifiers where the beverage is available.
    #[cfg_attr(feature = "serde", serde(default))]
    pub available_at: Vec<u64>,
}

impl Beverage {
    /// Construct a beverage with the required catalog fields.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        kind: impl Into<String>,
        style: impl Into<String>,
        producer: impl Into<String>,
        abv: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            style: style.into(),
            producer: producer.into(),
            abv,
            attributes: None,
            average_rating: None,
            available_at: Vec::new(),
        }
    }

    /// Attach a flavour attribute vector while returning `self` for chaining.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeVector) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Record the community average rating while returning `self` for chaining.
    #[must_use]
    pub fn with_average_rating(mut self, average_rating: f32) -> Self {
        self.average_rating = Some(average_rating);
        self
    }

    /// Declare the venues stocking this beverage while returning `self`.
    #[must_use]
    pub fn with_availability<I>(mut self, venues: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        self.available_at = venues.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute;

    #[test]
    fn builders_populate_optional_fields() {
        let vector = AttributeVector::new().with_value(Attribute::HopIntensity, 8.0);
        let beverage = Beverage::new(1, "Dry Dock", "beer", "Porter", "Brewery Y", 5.2)
            .with_attributes(vector.clone())
            .with_average_rating(4.1)
            .with_availability([3, 7]);
        assert_eq!(beverage.attributes, Some(vector));
        assert_eq!(beverage.average_rating, Some(4.1));
        assert_eq!(beverage.available_at, vec![3, 7]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn fixture_json_round_trips() {
        let fixture = r#"{
            "id": 9,
            "name": "Jumping Jack",
            "kind": "beer",
            "style": "American IPA",
            "producer": "Brewery X",
            "abv": 6.5,
            "attributes": {"hop_intensity": 8.0, "bitterness": 7.0}
        }"#;
        let beverage: Beverage = serde_json::from_str(fixture).expect("valid fixture");
        assert_eq!(beverage.id, 9);
        let attributes = beverage.attributes.as_ref().expect("attributes present");
        assert_eq!(attributes.value(Attribute::HopIntensity), Some(8.0));
        assert!(beverage.available_at.is_empty());
    }
}
