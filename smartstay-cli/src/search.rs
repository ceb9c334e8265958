//! Search command implementation for the Smart Stay CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use smartstay_core::{
    Hotel, HotelFilter, HotelStore, JsonHotelStore, SearchQuery, SearchResponse, SqliteHotelStore,
    search,
};
use smartstay_scorer::KeywordScorer;

use crate::{ARG_SEARCH_HOTELS, CliError, ENV_SEARCH_HOTELS};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank hotels from a local dataset against search criteria. \
                 The dataset is a JSON array (.json) or a SQLite database \
                 with a hotels table. Criteria can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank hotels from a local dataset"
)]
#[ortho_config(prefix = "SMARTSTAY")]
pub(crate) struct SearchArgs {
    /// Path to the hotel dataset (JSON array or SQLite database).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) hotels: Option<Utf8PathBuf>,
    /// Free-text query to rank listings against.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Case-insensitive substring filter on the listing location.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Upper bound on price per night; listings above it are excluded.
    #[arg(long = "max-price", value_name = "amount")]
    #[serde(default)]
    pub(crate) max_price: Option<u32>,
    /// Required amenity, matched against descriptions and amenity tags.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) amenity: Option<String>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    /// Path to the hotel dataset.
    pub(crate) hotels: Utf8PathBuf,
    /// Assembled search criteria.
    pub(crate) query: SearchQuery,
}

impl SearchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        if self.hotels.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field: ARG_SEARCH_HOTELS,
                path: self.hotels.clone(),
            })
        }
    }
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let hotels = args.hotels.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_HOTELS,
            env: ENV_SEARCH_HOTELS,
        })?;
        let mut query = SearchQuery::new();
        query.free_text = args.query;
        query.location = args.location;
        query.max_price = args.max_price;
        query.amenity = args.amenity;
        Ok(Self { hotels, query })
    }
}

/// Builds a hotel store for the current search invocation.
pub(super) trait SearchStoreBuilder {
    fn build(&self, config: &SearchConfig) -> Result<Box<dyn HotelStore>, CliError>;
}

/// Selects a store implementation from the dataset file extension.
pub(super) struct DefaultSearchStoreBuilder;

impl SearchStoreBuilder for DefaultSearchStoreBuilder {
    fn build(&self, config: &SearchConfig) -> Result<Box<dyn HotelStore>, CliError> {
        if config.hotels.extension() == Some("json") {
            let store = JsonHotelStore::open(config.hotels.as_std_path())
                .map_err(|source| CliError::OpenJsonStore { source })?;
            Ok(Box::new(store))
        } else {
            let store = SqliteHotelStore::open(config.hotels.as_std_path())
                .map_err(|source| CliError::OpenSqliteStore { source })?;
            Ok(Box::new(store))
        }
    }
}

pub(super) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSearchStoreBuilder;
    run_search_with(args, &builder, &mut stdout)
}

pub(super) fn run_search_with(
    args: SearchArgs,
    builder: &dyn SearchStoreBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_search(args, builder)?;
    write_search_response(writer, &response)
}

fn execute_search(
    args: SearchArgs,
    builder: &dyn SearchStoreBuilder,
) -> Result<SearchResponse, CliError> {
    let config = resolve_search_config(args)?;
    let store = builder.build(&config)?;
    let candidates: Vec<Hotel> = store.find(&HotelFilter::from_query(&config.query)).collect();
    Ok(search(candidates, &config.query, &KeywordScorer::new()))
}

fn resolve_search_config(args: SearchArgs) -> Result<SearchConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn write_search_response(
    writer: &mut dyn Write,
    response: &SearchResponse,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
