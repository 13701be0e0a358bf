//! Configuration infrastructure
//!
//! Typed configuration for the bulletin export tool, plus the constants
//! describing the BID site the HTTP and parsing layers are built around.

use serde::{Deserialize, Serialize};

/// CBF BID site constants
pub mod cbf_bid {
    /// Landing page; also serves as the session bootstrap and country
    /// enumeration URL.
    pub const BASE_URL: &str = "https://bid.cbf.com.br";

    /// Search endpoint path, relative to the base URL. Responds with a
    /// JSON envelope wrapping the result HTML fragment.
    pub const SEARCH_PATH: &str = "/a/bid/carregar/json/";

    /// Session cookie issued by the landing page.
    pub const SESSION_COOKIE: &str = "PHPSESSID";
}

/// Default values applied when no overrides are provided
pub mod defaults {
    /// Default request timeout in seconds, applied to every request.
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// Default user agent sent with every request.
    pub const USER_AGENT: &str = concat!("bid-scraper/", env!("CARGO_PKG_VERSION"));

    /// Default log filter directive when `RUST_LOG` is not set.
    pub const LOG_FILTER: &str = "info";

    /// Default output path offered by the CLI.
    pub const OUTPUT_FILE: &str = "./players.csv";
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the bulletin site.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: cbf_bid::BASE_URL.to_string(),
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            user_agent: defaults::USER_AGENT.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is absent, e.g. `info` or
    /// `bid_scraper=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: defaults::LOG_FILTER.to_string(),
        }
    }
}
