//! Hotel listings: the read-only inputs to relevance search.
//!
//! Listings are owned by the storage collaborator. The search pipeline never
//! mutates them; scoring annotates copies instead.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bookable hotel listing.
///
/// `location` conventionally reads `"Area, Region"` with comma-separated
/// parts; [`Hotel::primary_area`] exposes the first segment for the
/// area-match bonus.
///
/// # Examples
/// ```
/// use smartstay_core::Hotel;
///
/// let hotel = Hotel::new(1, "Seaside Retreat", "Calangute, Goa", 2800)
///     .with_description("Steps from the beach")
///     .with_amenities(["Pool", "WiFi"]);
///
/// assert_eq!(hotel.primary_area(), "calangute");
/// assert!(hotel.matches_amenity("pool"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hotel {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub title: String,
    /// Free-text description; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Free-text location, conventionally `"Area, Region"`.
    pub location: String,
    /// Price per night in whole currency units.
    pub price: u32,
    /// Ordered free-text amenity tags; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub amenities: Vec<String>,
}

impl Hotel {
    /// Construct a listing with an empty description and no amenities.
    ///
    /// # Examples
    /// ```
    /// use smartstay_core::Hotel;
    ///
    /// let hotel = Hotel::new(7, "City Stop", "Pune, Maharashtra", 1500);
    /// assert!(hotel.amenities.is_empty());
    /// ```
    pub fn new(
        id: u64,
        title: impl Into<String>,
        location: impl Into<String>,
        price: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            location: location.into(),
            price,
            amenities: Vec::new(),
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the amenity tags while returning `self` for chaining.
    #[must_use]
    pub fn with_amenities<I, A>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Return the first comma-delimited segment of `location`, trimmed and
    /// lower-cased.
    ///
    /// A listing located `"Calangute, Goa"` yields `"calangute"`. A location
    /// without a comma yields the whole string.
    ///
    /// # Examples
    /// ```
    /// use smartstay_core::Hotel;
    ///
    /// let hotel = Hotel::new(1, "Hill House", " Munnar , Kerala", 2200);
    /// assert_eq!(hotel.primary_area(), "munnar");
    /// ```
    #[must_use]
    pub fn primary_area(&self) -> String {
        self.location
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }

    /// Report whether `needle` appears, case-insensitively, in the
    /// description or any amenity tag.
    ///
    /// # Examples
    /// ```
    /// use smartstay_core::Hotel;
    ///
    /// let hotel = Hotel::new(1, "Garden Inn", "Lonavala, Maharashtra", 1800)
    ///     .with_amenities(["Free Parking"]);
    /// assert!(hotel.matches_amenity("parking"));
    /// assert!(!hotel.matches_amenity("pool"));
    /// ```
    #[must_use]
    pub fn matches_amenity(&self, needle: &str) -> bool {
        let needle_lc = needle.to_lowercase();
        self.description.to_lowercase().contains(&needle_lc)
            || self
                .amenities
                .iter()
                .any(|amenity| amenity.to_lowercase().contains(&needle_lc))
    }
}
