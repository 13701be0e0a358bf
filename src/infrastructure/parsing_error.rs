//! Parsing error types for bulletin HTML extraction
//!
//! Extraction is best-effort by design: missing fields on a card are not
//! errors. These variants cover the cases where no extraction attempt can
//! be made at all.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Element not found in document: {selector}")]
    ElementNotFound { selector: String },

    #[error("Country select '{selector}' has no options")]
    EmptyCountrySelect { selector: String },
}

impl ParsingError {
    /// Create an invalid selector error
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an element not found error
    pub fn element_not_found(selector: &str) -> Self {
        Self::ElementNotFound {
            selector: selector.to_string(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
