//! The fixed vocabulary of domain keywords driving relevance scoring.
//!
//! The enum offers compile-time safety for the scoring configuration; the
//! phrase list is the scoring contract and changes to it change ranking
//! behaviour.
//!
//! # Examples
//! ```
//! use smartstay_scorer::Keyword;
//!
//! assert_eq!(Keyword::Pool.phrase(), "pool");
//! assert_eq!(Keyword::AirConditioning.to_string(), "air conditioning");
//! ```
/// The fixed vocabulary of domain keywords driving relevance scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Swimming pools.
    Pool,
    /// Wireless internet.
    Wifi,
    /// On-site parking.
    Parking,
    /// Beach access or proximity.
    Beach,
    /// Air conditioning, abbreviated.
    Ac,
    /// Air conditioning, spelled out.
    AirConditioning,
    /// In-room kitchens.
    Kitchen,
    /// Fitness rooms.
    Gym,
    /// Spa facilities.
    Spa,
    /// Gardens and grounds.
    Garden,
    /// Premium positioning.
    Luxury,
    /// Economy positioning.
    Budget,
    /// Family-oriented stays.
    Family,
    /// Couple-oriented stays.
    Couple,
    /// Business travel.
    Business,
    /// Mountain settings.
    Mountain,
    /// Hill settings.
    Hill,
    /// Sea views and seaside settings.
    Sea,
}

impl Keyword {
    /// Every keyword in the vocabulary; order carries no meaning.
    pub const ALL: [Self; 18] = [
        Self::Pool,
        Self::Wifi,
        Self::Parking,
        Self::Beach,
        Self::Ac,
        Self::AirConditioning,
        Self::Kitchen,
        Self::Gym,
        Self::Spa,
        Self::Garden,
        Self::Luxury,
        Self::Budget,
        Self::Family,
        Self::Couple,
        Self::Business,
        Self::Mountain,
        Self::Hill,
        Self::Sea,
    ];

    /// Return the lower-case phrase matched against query and listing text.
    ///
    /// # Examples
    /// ```
    /// use smartstay_scorer::Keyword;
    ///
    /// assert_eq!(Keyword::Sea.phrase(), "sea");
    /// ```
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Pool => "pool",
            Self::Wifi => "wifi",
            Self::Parking => "parking",
            Self::Beach => "beach",
            Self::Ac => "ac",
            Self::AirConditioning => "air conditioning",
            Self::Kitchen => "kitchen",
            Self::Gym => "gym",
            Self::Spa => "spa",
            Self::Garden => "garden",
            Self::Luxury => "luxury",
            Self::Budget => "budget",
            Self::Family => "family",
            Self::Couple => "couple",
            Self::Business => "business",
            Self::Mountain => "mountain",
            Self::Hill => "hill",
            Self::Sea => "sea",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.phrase())
    }
}

impl std::str::FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.phrase() == needle)
            .ok_or_else(|| format!("unknown keyword '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn display_matches_phrase() {
        assert_eq!(Keyword::Gym.to_string(), Keyword::Gym.phrase());
    }

    #[test]
    fn vocabulary_has_no_duplicate_phrases() {
        let phrases: HashSet<&str> = Keyword::ALL.iter().map(|keyword| keyword.phrase()).collect();
        assert_eq!(phrases.len(), Keyword::ALL.len());
    }

    #[test]
    fn parsing_accepts_mixed_case() {
        assert_eq!(Keyword::from_str("WiFi"), Ok(Keyword::Wifi));
        assert_eq!(Keyword::from_str("Air Conditioning"), Ok(Keyword::AirConditioning));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Keyword::from_str("helipad").unwrap_err();
        assert!(err.contains("unknown keyword"));
    }
}
