//! Infrastructure layer for HTTP access, HTML parsing, and logging
//!
//! This module provides the HTTP client, the bulletin-specific client and
//! extractors, configuration, and logging setup the application layer is
//! built on.

pub mod bid_client;
pub mod config;
pub mod fetch_error;
pub mod html_parser;
pub mod http_client;
pub mod logging;
pub mod parsing_error;

// Re-export commonly used items
pub use bid_client::{BidClient, SearchResultFetcher};
pub use config::AppConfig;
pub use fetch_error::{FetchError, FetchResult};
pub use html_parser::{BidDataExtractor, BidSelectors};
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::{init_logging, init_logging_with_config};
pub use parsing_error::{ParsingError, ParsingResult};
