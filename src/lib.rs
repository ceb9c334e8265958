//! Facade crate for the Smart Stay hotel relevance engine.
//!
//! This crate re-exports the core domain types and exposes the keyword
//! scorer and store implementations behind feature flags.

#![forbid(unsafe_code)]

pub use smartstay_core::{
    Hotel, HotelFilter, HotelStore, MAX_SCORE, RESULT_CAP, ScoredHotel, Scorer, SearchQuery,
    SearchResponse, search,
};

#[cfg(feature = "serde")]
pub use smartstay_core::{JsonHotelStore, JsonHotelStoreError};

#[cfg(feature = "store-sqlite")]
pub use smartstay_core::{SqliteHotelStore, SqliteHotelStoreError};

#[cfg(feature = "scorer-keyword")]
pub use smartstay_scorer::{Keyword, KeywordScorer, KeywordScorerError, PriceBands, ScoreWeights};
