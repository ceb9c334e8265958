//! Request-time keyword relevance scoring.
//!
//! The scorer awards points per keyword that appears in the query itself and
//! also in the listing's text or amenities, plus an area bonus and price-band
//! affinities. Totals clamp to the shared score ceiling.

use thiserror::Error;

use smartstay_core::{Hotel, Scorer};

use crate::keyword::Keyword;
use crate::types::{PriceBands, ScoreWeights};

/// Query token enabling the mid-range price affinity.
///
/// Unlike "budget" and "luxury" it is not part of the keyword vocabulary, so
/// it never contributes text or amenity points.
const MID_RANGE_TOKEN: &str = "mid";

/// Errors raised when configuring the keyword scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordScorerError {
    /// The mid-range band was empty (minimum above maximum).
    #[error("mid-range price band must satisfy min <= max")]
    InvalidPriceBands,
}

/// Scorer ranking listings by query keywords, area, and price affinity.
///
/// Scoring is keyword-gated: a listing with a pool earns pool points only
/// when the query itself mentions "pool". The area bonus considers only the
/// first comma segment of the listing location, so a query naming the region
/// ("goa") but not the area ("calangute") earns nothing from a listing
/// located "Calangute, Goa"; the restriction is deliberate and kept
/// observable for callers that rely on it.
///
/// # Examples
///
/// ```
/// use smartstay_core::{Hotel, Scorer};
/// use smartstay_scorer::KeywordScorer;
///
/// let hotel = Hotel::new(1, "Palm Grove", "Calangute, Goa", 2400)
///     .with_description("Quiet garden rooms")
///     .with_amenities(["Pool", "WiFi"]);
/// let scorer = KeywordScorer::new();
///
/// // garden in text (20) + pool amenity (25) + area (30) = 75.
/// assert_eq!(scorer.score(&hotel, "calangute garden stay with pool"), 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordScorer {
    weights: ScoreWeights,
    bands: PriceBands,
}

impl KeywordScorer {
    /// Construct a scorer with the default weights and price bands.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
            bands: PriceBands::default(),
        }
    }

    /// Construct a scorer from explicit weights and price bands.
    ///
    /// # Errors
    /// Returns [`KeywordScorerError::InvalidPriceBands`] when the mid-range
    /// band is empty.
    pub const fn with_config(
        weights: ScoreWeights,
        bands: PriceBands,
    ) -> Result<Self, KeywordScorerError> {
        if bands.is_valid() {
            Ok(Self { weights, bands })
        } else {
            Err(KeywordScorerError::InvalidPriceBands)
        }
    }

    fn keyword_points(&self, hotel: &Hotel, query_lc: &str) -> u32 {
        let title_lc = hotel.title.to_lowercase();
        let description_lc = hotel.description.to_lowercase();
        let mut points = 0_u32;
        for keyword in Keyword::ALL {
            let phrase = keyword.phrase();
            if !query_lc.contains(phrase) {
                continue;
            }
            if title_lc.contains(phrase) || description_lc.contains(phrase) {
                points += self.weights.text_match;
            }
            if hotel
                .amenities
                .iter()
                .any(|amenity| amenity.to_lowercase().contains(phrase))
            {
                points += self.weights.amenity_match;
            }
        }
        points
    }

    fn area_points(&self, hotel: &Hotel, query_lc: &str) -> u32 {
        // Only the first comma segment counts; an empty area matches every
        // query.
        if query_lc.contains(&hotel.primary_area()) {
            self.weights.area_match
        } else {
            0
        }
    }

    fn price_affinity_points(&self, price: u32, query_lc: &str) -> u32 {
        let mut points = 0_u32;
        if query_lc.contains(Keyword::Budget.phrase()) && price < self.bands.budget_ceiling {
            points += self.weights.price_affinity;
        }
        if query_lc.contains(Keyword::Luxury.phrase()) && price > self.bands.luxury_floor {
            points += self.weights.price_affinity;
        }
        if query_lc.contains(MID_RANGE_TOKEN)
            && (self.bands.mid_range_min..=self.bands.mid_range_max).contains(&price)
        {
            points += self.weights.price_affinity;
        }
        points
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, hotel: &Hotel, query: &str) -> u8 {
        let query_lc = query.to_lowercase();
        let total = self.keyword_points(hotel, &query_lc)
            + self.area_points(hotel, &query_lc)
            + self.price_affinity_points(hotel.price, &query_lc);
        <Self as Scorer>::sanitise(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn scorer() -> KeywordScorer {
        KeywordScorer::new()
    }

    fn beach_hut() -> Hotel {
        Hotel::new(1, "Beach Hut", "Calangute, Goa", 2000)
            .with_description("Steps from the sand")
            .with_amenities(["Pool", "WiFi"])
    }

    #[rstest]
    fn unrelated_query_scores_zero(scorer: KeywordScorer) {
        let hotel = Hotel::new(1, "Plain Stay", "Indore, Madhya Pradesh", 1500);
        assert_eq!(scorer.score(&hotel, "xyzzy"), 0);
    }

    #[rstest]
    fn keyword_gating_requires_the_query_to_mention_it(scorer: KeywordScorer) {
        // The listing has a pool, but the query never asks for one.
        assert_eq!(scorer.score(&beach_hut(), "somewhere quiet"), 0);
    }

    #[rstest]
    fn amenity_only_match_earns_amenity_and_band_points(scorer: KeywordScorer) {
        // "pool" is absent from title and description: 25 (amenity) + 15
        // (budget, price < 3000) = 40.
        let hotel = Hotel::new(1, "Sunrise Lodge", "Anjuna, Goa", 2000)
            .with_amenities(["Pool"]);
        assert_eq!(scorer.score(&hotel, "budget hotel with pool"), 40);
    }

    #[rstest]
    fn text_and_amenity_points_stack_per_keyword(scorer: KeywordScorer) {
        // "beach" in title (20) + "pool" amenity (25) = 45.
        assert_eq!(scorer.score(&beach_hut(), "beach pool"), 45);
    }

    #[rstest]
    fn matching_is_case_insensitive(scorer: KeywordScorer) {
        assert_eq!(
            scorer.score(&beach_hut(), "BEACH POOL"),
            scorer.score(&beach_hut(), "beach pool")
        );
    }

    #[rstest]
    fn area_bonus_uses_only_the_first_location_segment(scorer: KeywordScorer) {
        assert_eq!(scorer.score(&beach_hut(), "trip to calangute"), 30);
        // The region name alone earns nothing.
        assert_eq!(scorer.score(&beach_hut(), "trip to goa"), 0);
    }

    #[rstest]
    fn area_bonus_applies_when_whole_location_is_one_segment(scorer: KeywordScorer) {
        let hotel = Hotel::new(2, "Plain Stay", "Goa, India", 2000);
        assert_eq!(scorer.score(&hotel, "trip to goa"), 30);
    }

    #[rstest]
    #[case(2999, 15)]
    #[case(3000, 0)] // boundary: strictly below the ceiling
    fn budget_band_is_strict(
        scorer: KeywordScorer,
        #[case] price: u32,
        #[case] expected: u8,
    ) {
        let hotel = Hotel::new(1, "Plain Stay", "Indore, Madhya Pradesh", price);
        assert_eq!(scorer.score(&hotel, "budget"), expected);
    }

    #[rstest]
    #[case(4000, 0)] // boundary: strictly above the floor
    #[case(4001, 15)]
    fn luxury_band_is_strict(
        scorer: KeywordScorer,
        #[case] price: u32,
        #[case] expected: u8,
    ) {
        let hotel = Hotel::new(1, "Plain Stay", "Indore, Madhya Pradesh", price);
        assert_eq!(scorer.score(&hotel, "luxury"), expected);
    }

    #[rstest]
    #[case(2499, 0)]
    #[case(2500, 15)]
    #[case(4500, 15)]
    #[case(4501, 0)]
    fn mid_range_band_is_inclusive(
        scorer: KeywordScorer,
        #[case] price: u32,
        #[case] expected: u8,
    ) {
        let hotel = Hotel::new(1, "Plain Stay", "Indore, Madhya Pradesh", price);
        assert_eq!(scorer.score(&hotel, "mid range stay"), expected);
    }

    #[rstest]
    fn totals_clamp_at_the_ceiling(scorer: KeywordScorer) {
        let hotel = Hotel::new(1, "Luxury Beach Spa Pool Garden", "Calangute, Goa", 5000)
            .with_description("luxury beach spa pool garden gym wifi parking")
            .with_amenities(["Pool", "Spa", "Gym", "WiFi", "Parking", "Garden"]);
        let score = scorer.score(&hotel, "luxury beach spa pool garden gym wifi parking calangute");
        assert_eq!(score, 100);
    }

    #[rstest]
    fn custom_bands_shift_the_affinities() {
        let scorer = KeywordScorer::with_config(
            ScoreWeights::default(),
            PriceBands {
                budget_ceiling: 1000,
                ..PriceBands::default()
            },
        )
        .expect("valid bands");
        let hotel = Hotel::new(1, "Plain Stay", "Indore, Madhya Pradesh", 1500);
        assert_eq!(scorer.score(&hotel, "budget"), 0);
    }

    #[rstest]
    fn invalid_bands_are_rejected() {
        let error = KeywordScorer::with_config(
            ScoreWeights::default(),
            PriceBands {
                mid_range_min: 5000,
                mid_range_max: 2500,
                ..PriceBands::default()
            },
        )
        .expect_err("empty mid-range band should error");
        assert_eq!(error, KeywordScorerError::InvalidPriceBands);
    }
}
