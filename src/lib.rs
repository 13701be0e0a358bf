//! BID bulletin scraper
//!
//! Scrapes the CBF's daily transfer-registration bulletin: bootstraps a
//! session, enumerates the selectable countries, walks a date range per
//! country, extracts player records from the result cards, and streams
//! them into a CSV file.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the pieces the binary wires together
pub use application::{player_stream, CsvExporter, ExportError};
pub use domain::{ExportPlan, PlanError, Player, SearchQuery};
pub use infrastructure::{
    BidClient, BidDataExtractor, FetchError, HttpClient, HttpClientConfig, ParsingError,
    SearchResultFetcher,
};
