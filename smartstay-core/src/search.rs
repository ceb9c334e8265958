//! The search pipeline: structural filters, scoring, ordering, and capping.
//!
//! [`search`] is a pure function over its inputs. Structural filters apply
//! unconditionally; scoring and the relevance sort only run when free text is
//! present; the amenity filter and result cap apply last.

use std::cmp::Reverse;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Hotel, HotelFilter, Scorer, SearchQuery};

/// Maximum number of listings returned by a search.
pub const RESULT_CAP: usize = 20;

/// A hotel listing annotated with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredHotel {
    /// The underlying listing.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub hotel: Hotel,
    /// Relevance estimate in `0..=100`; present only for free-text searches.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "matchScore",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub match_score: Option<u8>,
}

/// Result payload for a search: the capped listing set and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResponse {
    /// Always `true`; failures surface as errors before a response exists.
    pub success: bool,
    /// Number of listings returned.
    pub count: usize,
    /// Ranked (or stored-order) listings, at most [`RESULT_CAP`] of them.
    pub hotels: Vec<ScoredHotel>,
}

impl SearchResponse {
    /// Wrap a result set, recording its length.
    #[must_use]
    pub fn new(hotels: Vec<ScoredHotel>) -> Self {
        Self {
            success: true,
            count: hotels.len(),
            hotels,
        }
    }
}

/// Rank `candidates` against `query`, returning at most [`RESULT_CAP`]
/// listings.
///
/// The location and price filters apply whether or not free text is present.
/// With free text, every surviving listing is scored and the set is sorted
/// descending by score; the sort is stable, so ties keep their incoming
/// order. Without free text no score is attached and the incoming order is
/// preserved. The amenity filter then applies to the (possibly scored) set
/// before truncation.
///
/// Empty queries, empty candidate sets, and empty results are all valid
/// outcomes, not errors.
///
/// # Examples
/// ```
/// use smartstay_core::{Hotel, Scorer, SearchQuery, search};
///
/// struct PriceScorer;
///
/// impl Scorer for PriceScorer {
///     fn score(&self, hotel: &Hotel, _query: &str) -> u8 {
///         Self::sanitise(hotel.price)
///     }
/// }
///
/// let candidates = vec![
///     Hotel::new(1, "Cheap Stop", "Pune, Maharashtra", 40),
///     Hotel::new(2, "Grand Palace", "Pune, Maharashtra", 90),
/// ];
/// let query = SearchQuery::new().with_free_text("pune");
/// let response = search(candidates, &query, &PriceScorer);
///
/// assert_eq!(response.count, 2);
/// assert_eq!(response.hotels.first().map(|entry| entry.hotel.id), Some(2));
/// ```
#[must_use]
pub fn search<S>(candidates: Vec<Hotel>, query: &SearchQuery, scorer: &S) -> SearchResponse
where
    S: Scorer + ?Sized,
{
    let filter = HotelFilter::from_query(query);
    let working: Vec<Hotel> = candidates
        .into_iter()
        .filter(|hotel| filter.matches(hotel))
        .collect();

    let free_text = query.free_text.as_deref();
    let mut results: Vec<ScoredHotel> = working
        .into_iter()
        .map(|hotel| {
            let match_score = free_text.map(|text| scorer.score(&hotel, text));
            ScoredHotel { hotel, match_score }
        })
        .collect();

    if free_text.is_some() {
        // Stable sort: ties keep the order the store produced.
        results.sort_by_key(|entry| Reverse(entry.match_score));
    }

    if let Some(amenity) = query.amenity.as_deref() {
        results.retain(|entry| entry.hotel.matches_amenity(amenity));
    }

    results.truncate(RESULT_CAP);
    SearchResponse::new(results)
}
