//! Core domain types for the Smart Stay relevance engine.
//!
//! The crate models hotel listings and the search pipeline that ranks them
//! against a free-text query: structural filters, keyword-driven scoring via
//! the [`Scorer`] trait, stable ordering, and a fixed result cap. Storage is
//! abstracted behind the read-only [`HotelStore`] trait with JSON-file and
//! `SQLite` implementations behind feature flags.

#![forbid(unsafe_code)]

pub mod hotel;
pub mod query;
pub mod scorer;
pub mod search;
pub mod store;
pub mod test_support;

pub use hotel::Hotel;
pub use query::SearchQuery;
pub use scorer::{MAX_SCORE, Scorer};
pub use search::{RESULT_CAP, ScoredHotel, SearchResponse, search};
pub use store::{HotelFilter, HotelStore};

#[cfg(feature = "serde")]
pub use store::{JsonHotelStore, JsonHotelStoreError};

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteHotelStore, SqliteHotelStoreError};
