//! Search criteria supplied by the caller.
//!
//! All fields are optional; a missing field simply skips the corresponding
//! filter or disables scoring. Builder-style `with_*` methods support
//! chaining.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for a hotel search.
///
/// # Examples
/// ```
/// use smartstay_core::SearchQuery;
///
/// let query = SearchQuery::new()
///     .with_free_text("budget hotel with pool")
///     .with_max_price(3000);
/// assert_eq!(query.max_price, Some(3000));
/// assert!(query.amenity.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchQuery {
    /// Free text to rank listings against; absent means no scoring.
    #[cfg_attr(feature = "serde", serde(default))]
    pub free_text: Option<String>,
    /// Case-insensitive substring filter on the listing location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<String>,
    /// Upper bound on price per night; listings above it are excluded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_price: Option<u32>,
    /// Required amenity, matched against descriptions and amenity tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub amenity: Option<String>,
}

impl SearchQuery {
    /// Construct an empty query matching every listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query while returning `self` for chaining.
    #[must_use]
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    /// Set the location filter while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the price ceiling while returning `self` for chaining.
    #[must_use]
    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Set the required amenity while returning `self` for chaining.
    #[must_use]
    pub fn with_amenity(mut self, amenity: impl Into<String>) -> Self {
        self.amenity = Some(amenity.into());
        self
    }
}
