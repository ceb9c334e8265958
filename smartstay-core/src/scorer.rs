//! Score hotel listings against a free-text query.
//!
//! The `Scorer` trait assigns a relevance score to a [`Hotel`](crate::Hotel)
//! given the caller's query text.

use crate::Hotel;

/// Upper bound for relevance scores.
pub const MAX_SCORE: u8 = 100;

/// Calculate a relevance score for a hotel listing.
///
/// Higher scores indicate a better match between the listing and the query.
/// Implementations must be thread-safe (`Send` + `Sync`) so scorers can run
/// across threads. The method is infallible; implementers must return `0`
/// when nothing in the listing relates to the query.
///
/// Implementations must:
/// - Be deterministic: identical inputs always yield the same score.
/// - Produce values in the range `0..=MAX_SCORE`.
///
/// Use [`Scorer::sanitise`] to apply the upper clamp; contributions are
/// non-negative by construction, so no lower clamp exists.
///
/// # Examples
///
/// ```rust
/// use smartstay_core::{Hotel, MAX_SCORE, Scorer};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _hotel: &Hotel, _query: &str) -> u8 {
///         MAX_SCORE
///     }
/// }
///
/// let hotel = Hotel::new(1, "Any", "Anywhere", 1000);
/// assert_eq!(UnitScorer.score(&hotel, "anything"), MAX_SCORE);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `hotel` according to the free-text `query`.
    fn score(&self, hotel: &Hotel, query: &str) -> u8;

    /// Clamp a raw point total to `0..=MAX_SCORE`.
    fn sanitise(raw: u32) -> u8 {
        u8::try_from(raw.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
    }
}
