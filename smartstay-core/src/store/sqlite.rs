//! SQLite-backed store implementation for hotel listings.
//!
//! Rows load eagerly at open time from a `hotels` table; amenities persist as
//! a JSON array column. [`HotelStore::find`] filters in memory and is
//! infallible.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

use crate::Hotel;

use super::{HotelFilter, HotelStore, duplicate_id};

const HOTEL_SELECT_SQL: &str =
    "SELECT id, title, description, location, price, amenities FROM hotels";

/// Error raised when reading or validating a SQLite hotel dataset.
#[derive(Debug, Error)]
pub enum SqliteHotelStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a database query failed.
    #[error("failed to {operation}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A hotel identifier could not be represented as `u64`.
    #[error("hotel id {id} is outside the supported range")]
    HotelIdOutOfRange {
        /// Identifier read from the database.
        id: i64,
    },
    /// A price column held a negative or oversized value.
    #[error("price {price} for hotel {id} is outside the supported range")]
    PriceOutOfRange {
        /// Identifier of the affected listing.
        id: u64,
        /// Raw value found in the database.
        price: i64,
    },
    /// The stored amenities payload was not a JSON array of strings.
    #[error("failed to parse amenities for hotel {id}: {source}")]
    InvalidAmenities {
        /// Identifier of the listing whose amenities failed to parse.
        id: u64,
        /// JSON decoding failure.
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

/// Read-only hotel store backed by a SQLite database.
#[derive(Debug)]
pub struct SqliteHotelStore {
    hotels: Vec<Hotel>,
}

impl SqliteHotelStore {
    /// Open a store backed by the SQLite database at `path`.
    ///
    /// The database must contain a `hotels` table with `id`, `title`,
    /// `description`, `location`, `price`, and `amenities` columns; nullable
    /// `description` and `amenities` default to empty. Listings are sorted by
    /// ascending `id` so iteration order is deterministic.
    ///
    /// # Errors
    /// Returns [`SqliteHotelStoreError`] when the database cannot be opened
    /// or queried, a row holds out-of-range numbers or malformed amenities,
    /// or two rows share an identifier.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SqliteHotelStoreError> {
        let path = path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteHotelStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;

        let mut hotels = load_hotels(&connection)?;
        hotels.sort_unstable_by_key(|hotel| hotel.id);
        if let Some(id) = duplicate_id(&hotels) {
            return Err(SqliteHotelStoreError::DuplicateHotelId { id });
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

impl HotelStore for SqliteHotelStore {
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

fn load_hotels(connection: &Connection) -> Result<Vec<Hotel>, SqliteHotelStoreError> {
    let mut statement =
        connection
            .prepare(HOTEL_SELECT_SQL)
            .map_err(|source| SqliteHotelStoreError::Query {
                operation: "prepare hotel selection",
                source,
            })?;

    let rows = statement
        .query_map([], |row| {
            let id: i64 = row.get(0)?;
            let title: String = row.get(1)?;
            let description: Option<String> = row.get(2)?;
            let location: String = row.get(3)?;
            let price: i64 = row.get(4)?;
            let amenities: Option<String> = row.get(5)?;
            Ok((id, title, description, location, price, amenities))
        })
        .map_err(|source| SqliteHotelStoreError::Query {
            operation: "query hotels",
            source,
        })?;

    let mut hotels = Vec::new();
    for row in rows {
        let (raw_id, title, description, location, raw_price, amenities_json) =
            row.map_err(|source| SqliteHotelStoreError::Query {
                operation: "read hotel row",
                source,
            })?;
        let id = u64::try_from(raw_id)
            .map_err(|_| SqliteHotelStoreError::HotelIdOutOfRange { id: raw_id })?;
        let price = u32::try_from(raw_price)
            .map_err(|_| SqliteHotelStoreError::PriceOutOfRange {
                id,
                price: raw_price,
            })?;
        let amenities = match amenities_json {
            None => Vec::new(),
            Some(payload) => serde_json::from_str(&payload)
                .map_err(|source| SqliteHotelStoreError::InvalidAmenities { id, source })?,
        };
        hotels.push(Hotel {
            id,
            title,
            description: description.unwrap_or_default(),
            location,
            price,
            amenities,
        });
    }
    Ok(hotels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CREATE_HOTELS_SQL: &str = "CREATE TABLE hotels (
        id INTEGER PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        location TEXT NOT NULL,
        price INTEGER NOT NULL,
        amenities TEXT
    )";

    #[fixture]
    fn temp_database() -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let db_path = dir.path().join("hotels.db");
        (dir, db_path)
    }

    fn seed_database(path: &PathBuf, rows: &[(i64, &str, Option<&str>, &str, i64, Option<&str>)]) {
        let connection = Connection::open(path).expect("create SQLite database");
        connection
            .execute(CREATE_HOTELS_SQL, [])
            .expect("create hotels table");
        for row in rows {
            connection
                .execute(
                    "INSERT INTO hotels (id, title, description, location, price, amenities)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    (row.0, row.1, row.2, row.3, row.4, row.5),
                )
                .expect("insert hotel row");
        }
    }

    #[rstest]
    fn loads_rows_with_amenities(
        #[from(temp_database)] (_dir, db_path): (TempDir, PathBuf),
    ) {
        seed_database(
            &db_path,
            &[
                (
                    2,
                    "City Tower",
                    Some("Business hotel"),
                    "Mumbai, Maharashtra",
                    5000,
                    Some(r#"["Gym", "WiFi"]"#),
                ),
                (1, "Beach Hut", None, "Calangute, Goa", 2000, None),
            ],
        );
        let store = SqliteHotelStore::open(&db_path).expect("open store");
        let hotels: Vec<Hotel> = store.find(&HotelFilter::new()).collect();
        let ids: Vec<u64> = hotels.iter().map(|hotel| hotel.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            hotels.last().map(|hotel| hotel.amenities.clone()),
            Some(vec![String::from("Gym"), String::from("WiFi")])
        );
        assert_eq!(hotels.first().map(|hotel| hotel.description.as_str()), Some(""));
    }

    #[rstest]
    fn filter_pushdown_matches_in_memory_semantics(
        #[from(temp_database)] (_dir, db_path): (TempDir, PathBuf),
    ) {
        seed_database(
            &db_path,
            &[
                (1, "Beach Hut", None, "Calangute, Goa", 2000, None),
                (2, "Panaji Suites", None, "Panaji, Goa", 5000, None),
                (3, "Hill Lodge", None, "Munnar, Kerala", 2000, None),
            ],
        );
        let store = SqliteHotelStore::open(&db_path).expect("open store");
        let filter = HotelFilter::new().with_location("goa").with_max_price(2000);
        let ids: Vec<u64> = store.find(&filter).map(|hotel| hotel.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[rstest]
    fn missing_database_fails_to_open(
        #[from(temp_database)] (_dir, db_path): (TempDir, PathBuf),
    ) {
        let error = SqliteHotelStore::open(&db_path).expect_err("missing database should fail");
        assert!(matches!(error, SqliteHotelStoreError::OpenDatabase { .. }));
    }

    #[rstest]
    fn invalid_amenities_payload_is_rejected(
        #[from(temp_database)] (_dir, db_path): (TempDir, PathBuf),
    ) {
        seed_database(
            &db_path,
            &[(1, "Beach Hut", None, "Calangute, Goa", 2000, Some("not-json"))],
        );
        let error = SqliteHotelStore::open(&db_path).expect_err("invalid amenities should fail");
        assert!(matches!(
            error,
            SqliteHotelStoreError::InvalidAmenities { id: 1, .. }
        ));
    }

    #[rstest]
    fn negative_price_is_rejected(
        #[from(temp_database)] (_dir, db_path): (TempDir, PathBuf),
    ) {
        seed_database(
            &db_path,
            &[(1, "Beach Hut", None, "Calangute, Goa", -50, None)],
        );
        let error = SqliteHotelStore::open(&db_path).expect_err("negative price should fail");
        assert!(matches!(
            error,
            SqliteHotelStoreError::PriceOutOfRange { id: 1, price: -50 }
        ));
    }

    #[rstest]
    fn negative_id_is_rejected(
        #[from(temp_database)] (_dir, db_path): (TempDir, PathBuf),
    ) {
        seed_database(
            &db_path,
            &[(-7, "Ghost Inn", None, "Nowhere", 100, None)],
        );
        let error = SqliteHotelStore::open(&db_path).expect_err("negative id should fail");
        assert!(matches!(
            error,
            SqliteHotelStoreError::HotelIdOutOfRange { id: -7 }
        ));
    }
}
