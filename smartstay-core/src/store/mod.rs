//! Data access traits for hotel listings.
//!
//! The `HotelStore` trait defines a read-only interface for retrieving
//! [`Hotel`] values. Consumers use it to fetch the candidate set for a
//! search, optionally pushed down through a [`HotelFilter`].

use crate::{Hotel, SearchQuery};

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "serde")]
pub use json::{JsonHotelStore, JsonHotelStoreError};
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteHotelStore, SqliteHotelStoreError};

/// Structural predicates a store can apply while producing candidates.
///
/// Both predicates are unconditional: they exclude listings whether or not a
/// free-text query accompanies them.
///
/// # Examples
/// ```
/// use smartstay_core::{Hotel, HotelFilter};
///
/// let filter = HotelFilter::new().with_location("goa").with_max_price(3000);
/// let listing = Hotel::new(1, "Beach Hut", "Calangute, Goa", 3000);
/// assert!(filter.matches(&listing));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HotelFilter {
    /// Case-insensitive substring required in the listing location.
    pub location: Option<String>,
    /// Inclusive upper bound on price per night.
    pub max_price: Option<u32>,
}

impl HotelFilter {
    /// Construct a filter matching every listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location predicate while returning `self` for chaining.
    #[must_use]
    pub fn with_location(mut self, needle: impl Into<String>) -> Self {
        self.location = Some(needle.into());
        self
    }

    /// Set the price ceiling while returning `self` for chaining.
    #[must_use]
    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Extract the structural predicates from a [`SearchQuery`].
    #[must_use]
    pub fn from_query(query: &SearchQuery) -> Self {
        Self {
            location: query.location.clone(),
            max_price: query.max_price,
        }
    }

    /// Report whether `hotel` satisfies both predicates.
    ///
    /// A listing priced exactly at the ceiling is included.
    #[must_use]
    pub fn matches(&self, hotel: &Hotel) -> bool {
        let location_ok = self.location.as_deref().is_none_or(|needle| {
            hotel.location.to_lowercase().contains(&needle.to_lowercase())
        });
        let price_ok = self.max_price.is_none_or(|ceiling| hotel.price <= ceiling);
        location_ok && price_ok
    }
}

/// Read-only access to stored hotel listings.
///
/// Implementers return listings in a deterministic order (the bundled stores
/// iterate by ascending `id`) so that unscored searches produce stable
/// results.
///
/// # Examples
///
/// ```rust
/// use smartstay_core::{Hotel, HotelFilter, HotelStore};
///
/// struct MemoryStore {
///     hotels: Vec<Hotel>,
/// }
///
/// impl HotelStore for MemoryStore {
///     fn find(&self, filter: &HotelFilter) -> Box<dyn Iterator<Item = Hotel> + Send + '_> {
///         let predicate = filter.clone();
///         Box::new(
///             self.hotels
///                 .iter()
///                 .filter(move |hotel| predicate.matches(hotel))
///                 .cloned(),
///         )
///     }
/// }
///
/// let listing = Hotel::new(1, "Beach Hut", "Calangute, Goa", 2000);
/// let store = MemoryStore { hotels: vec![listing.clone()] };
///
/// let found: Vec<_> = store.find(&HotelFilter::new()).collect();
/// assert_eq!(found, vec![listing]);
/// ```
pub trait HotelStore {
    /// Return all listings satisfying `filter`.
    ///
    /// Filtering is a pushdown of the same predicates
    /// [`HotelFilter::matches`] evaluates; implementations must not weaken or
    /// strengthen them.
    fn find(&self, filter: &HotelFilter) -> Box<dyn Iterator<Item = Hotel> + Send + '_>;
}

/// Find the first identifier that appears twice in an id-sorted slice.
#[cfg(any(feature = "serde", feature = "store-sqlite"))]
pub(crate) fn duplicate_id(hotels: &[Hotel]) -> Option<u64> {
    hotels.windows(2).find_map(|pair| match pair {
        [first, second] if first.id == second.id => Some(first.id),
        _ => None,
    })
}
