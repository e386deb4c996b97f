//! Core domain types for the Hopwise engine.
//!
//! The crate defines the records exchanged between the application shell and
//! the recommendation engine: candidate [`Beverage`]s, user [`Rating`]s, the
//! aggregated [`TasteProfile`], and the [`Scorer`] trait that isolates the
//! similarity formula behind a swappable seam.
//!
//! # Examples
//!
//! ```
//! use hopwise_core::{Beverage, TasteProfile};
//!
//! let profile = TasteProfile::default_profile();
//! let candidate = Beverage::new(1, "Jumping Jack", "beer", "American IPA", "Brewery X", 6.5);
//! assert_eq!(profile.top_beverage_type(), Some("beer"));
//! assert!(profile.abv_range.contains(candidate.abv));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attribute;
pub mod beverage;
pub mod profile;
pub mod rating;
pub mod scorer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attribute::{ATTRIBUTE_SCALE, Attribute, AttributeValueError, AttributeVector};
pub use beverage::Beverage;
pub use profile::{AbvRange, PriceRange, TasteProfile};
pub use rating::{RATING_SCALE, Rating, RatingError};
pub use scorer::Scorer;
