//! JSON-file store implementation for hotel listings.
//!
//! The whole dataset loads eagerly at open time; [`HotelStore::find`] then
//! filters in memory and is infallible. Datasets are JSON arrays of listing
//! objects.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Hotel;

use super::{HotelFilter, HotelStore, duplicate_id};

/// Error raised when reading or validating a JSON hotel dataset.
#[derive(Debug, Error)]
pub enum JsonHotelStoreError {
    /// Reading the dataset from disk failed.
    #[error("failed to read hotel dataset from {path}: {source}")]
    ReadFile {
        /// Location of the dataset on disk.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The dataset was not a valid JSON array of listings.
    #[error("failed to decode hotel dataset from {path}: {source}")]
    Decode {
        /// Location of the dataset on disk.
        path: PathBuf,
        /// Decoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Two listings shared an identifier.
    #[error("hotel id {id} appears more than once in the dataset")]
    DuplicateHotelId {
        /// Identifier present on multiple listings.
        id: u64,
    },
}

/// Read-only hotel store backed by a JSON array on disk.
///
/// # Examples
///
/// ```no_run
/// use smartstay_core::{HotelFilter, HotelStore, JsonHotelStore};
///
/// let store = JsonHotelStore::open("data/hotels.json")?;
/// let filter = HotelFilter::new().with_max_price(3000);
/// let affordable: Vec<_> = store.find(&filter).collect();
/// assert!(affordable.len() <= store.len());
/// # Ok::<(), smartstay_core::JsonHotelStoreError>(())
/// ```
#[derive(Debug)]
pub struct JsonHotelStore {
    hotels: Vec<Hotel>,
}

impl JsonHotelStore {
    /// Open a store backed by the JSON dataset at `path`.
    ///
    /// Listings are sorted by ascending `id` so iteration order is
    /// deterministic.
    ///
    /// # Errors
    /// Returns [`JsonHotelStoreError`] when the file cannot be read, the
    /// payload is not a JSON array of listings, or two listings share an
    /// identifier.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, JsonHotelStoreError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| JsonHotelStoreError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let mut hotels: Vec<Hotel> =
            serde_json::from_slice(&bytes).map_err(|source| JsonHotelStoreError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        hotels.sort_unstable_by_key(|hotel| hotel.id);
        if let Some(id) = duplicate_id(&hotels) {
            return Err(JsonHotelStoreError::DuplicateHotelId { id });
        }
        log::debug!("loaded {} hotels from {}", hotels.len(), path.display());
        Ok(Self { hotels })
    }

    /// Return the number of listings in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    /// Report whether the store holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}

impl HotelStore for JsonHotelStore {
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
