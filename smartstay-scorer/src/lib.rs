//! Keyword relevance scoring for Smart Stay hotel search.
//!
//! The crate ranks hotel listings against free-text queries with a fixed
//! vocabulary of domain keywords: a keyword contributes points only when it
//! appears in the query itself, and then only for the listing fields it also
//! appears in. Area and price-affinity bonuses round out the score, which the
//! [`KeywordScorer`] clamps to the `0..=100` scale defined by
//! [`smartstay_core::MAX_SCORE`].
//!
//! # Examples
//!
//! ```
//! use smartstay_core::{Hotel, Scorer};
//! use smartstay_scorer::KeywordScorer;
//!
//! let hotel = Hotel::new(1, "Beach Hut", "Calangute, Goa", 2000)
//!     .with_amenities(["Pool"]);
//! let scorer = KeywordScorer::new();
//!
//! // "pool" matches an amenity (25) and "budget" matches the price band (15).
//! assert_eq!(scorer.score(&hotel, "budget hotel with pool"), 40);
//! ```

#![forbid(unsafe_code)]

mod keyword;
mod relevance;
mod types;

pub use keyword::Keyword;
pub use relevance::{KeywordScorer, KeywordScorerError};
pub use types::{PriceBands, ScoreWeights};
