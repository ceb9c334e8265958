//! Command-line interface for Smart Stay hotel search.
#![forbid(unsafe_code)]

use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use thiserror::Error;

mod search;

use search::SearchArgs;

pub(crate) const ARG_SEARCH_HOTELS: &str = "hotels";
pub(crate) const ENV_SEARCH_HOTELS: &str = "SMARTSTAY_CMDS_SEARCH_HOTELS";

/// Run the Smart Stay CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// dataset loading, or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => search::run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "smartstay",
    about = "Hotel relevance search utilities for the Smart Stay engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank hotels from a local dataset against search criteria.
    Search(SearchArgs),
}

/// Errors emitted by the Smart Stay CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced dataset path does not exist on disk.
    #[error("{field} path {path} does not exist")]
    MissingSourceFile {
        /// Name of the option referencing the dataset.
        field: &'static str,
        /// Path that was expected to exist.
        path: Utf8PathBuf,
    },
    /// Opening a JSON hotel dataset failed.
    #[error("search failed: {source}")]
    OpenJsonStore {
        /// Source error from the JSON store.
        #[source]
        source: smartstay_core::JsonHotelStoreError,
    },
    /// Opening a SQLite hotel dataset failed.
    #[error("search failed: {source}")]
    OpenSqliteStore {
        /// Source error from the SQLite store.
        #[source]
        source: smartstay_core::SqliteHotelStoreError,
    },
    /// Serialising the search response failed.
    #[error("failed to serialise search response")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the search output failed.
    #[error("failed to write search output")]
    WriteOutput(#[source] std::io::Error),
}
