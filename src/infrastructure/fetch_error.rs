//! Fetch error types for bulletin HTTP operations
//!
//! One fetch failure never aborts a run; the export driver logs the pair
//! and moves on. Only session bootstrap and country enumeration failures
//! are fatal, and that decision belongs to the caller.

use thiserror::Error;

use crate::infrastructure::parsing_error::ParsingError;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("session cookie '{cookie}' missing from landing page response")]
    SessionCookieMissing { cookie: String },

    #[error("search rejected by server: {message}")]
    SearchRejected { message: String },

    #[error("unexpected search response: {0}")]
    InvalidEnvelope(#[from] serde_json::Error),

    #[error("failed to parse fetched page: {0}")]
    Parsing(#[from] ParsingError),
}

pub type FetchResult<T> = Result<T, FetchError>;
