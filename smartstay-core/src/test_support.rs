//! Test-only, in-memory `HotelStore` and deterministic scorers used by unit
//! and behaviour tests.

use crate::{Hotel, HotelFilter, HotelStore, Scorer};

/// In-memory `HotelStore` implementation used in tests.
///
/// The store performs a linear scan and is intended only for small datasets.
#[derive(Default, Debug)]
pub struct MemoryStore {
    hotels: Vec<Hotel>,
}

impl MemoryStore {
    /// Create a store containing a single listing.
    #[must_use]
    pub fn with_hotel(hotel: Hotel) -> Self {
        Self::with_hotels(std::iter::once(hotel))
    }

    /// Create a store from a collection of listings.
    pub fn with_hotels<I>(hotels: I) -> Self
    where
        I: IntoIterator<Item = Hotel>,
    {
        Self {
            hotels: hotels.into_iter().collect(),
        }
    }
}

impl HotelStore for MemoryStore {
    fn find(&self, filter: &HotelFilter) -> Box<dyn Iterator<Item = Hotel> + Send + '_> {
        let predicate = filter.clone();
        Box::new(
            self.hotels
                .iter()
                .filter(move |hotel| predicate.matches(hotel))
                .cloned(),
        )
    }
}

/// Test `Scorer` returning the same score for every listing.
///
/// Useful for asserting stable tie ordering.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedScorer {
    score: u8,
}

impl FixedScorer {
    /// Create a scorer that always returns `score`.
    #[must_use]
    pub const fn new(score: u8) -> Self {
        Self { score }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _hotel: &Hotel, _query: &str) -> u8 {
        self.score
    }
}

/// Test `Scorer` scoring a listing by its price, clamped to the score scale.
///
/// Deterministic and order-revealing: pick prices below the clamp to control
/// the ranking.
#[derive(Debug, Copy, Clone, Default)]
pub struct PriceScorer;

impl Scorer for PriceScorer {
    fn score(&self, hotel: &Hotel, _query: &str) -> u8 {
        Self::sanitise(hotel.price)
    }
}
