//! Tunable configuration for keyword relevance scoring.

/// Point values awarded per matching signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Points for a keyword found in the title or description.
    pub text_match: u32,
    /// Points for a keyword found in an amenity tag.
    pub amenity_match: u32,
    /// Points for the listing's primary area appearing in the query.
    pub area_match: u32,
    /// Points for a price-band affinity ("budget", "luxury", "mid").
    pub price_affinity: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            text_match: 20,
            amenity_match: 25,
            area_match: 30,
            price_affinity: 15,
        }
    }
}

/// Price thresholds backing the affinity bonuses.
///
/// All values are whole currency units per night. The bands may overlap; each
/// affinity is judged independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBands {
    /// "budget" queries favour listings priced strictly below this.
    pub budget_ceiling: u32,
    /// "luxury" queries favour listings priced strictly above this.
    pub luxury_floor: u32,
    /// Lower bound (inclusive) of the mid-range band.
    pub mid_range_min: u32,
    /// Upper bound (inclusive) of the mid-range band.
    pub mid_range_max: u32,
}

impl PriceBands {
    /// Report whether the mid-range band is non-empty.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.mid_range_min <= self.mid_range_max
    }
}

impl Default for PriceBands {
    fn default() -> Self {
        Self {
            budget_ceiling: 3000,
            luxury_floor: 4000,
            mid_range_min: 2500,
            mid_range_max: 4500,
        }
    }
}
