use std::result;

use thiserror::Error;

/// Message shown when the identifier search returns nothing
pub const NO_RESULTS_MESSAGE: &str = "No research papers found. Try different search terms.";

/// Message shown for any failure while talking to the provider
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch research papers. Please try again.";

/// Error types for drug-development paper searches
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Provider answered with a non-success status or an embedded error
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Identifier returned by the provider is not a PMID
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// Invalid query structure or parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The identifier search matched no papers
    #[error("No research papers found")]
    NoResults,
}

pub type Result<T> = result::Result<T, SearchError>;

/// User-facing classification of a [`SearchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Zero identifiers came back from the identifier search
    NoResults,
    /// Network, status or payload failure at either provider call
    Fetch,
    /// The caller handed in a selection outside the supported set
    Input,
}

impl SearchError {
    /// Classify the error into one of the user-facing kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::NoResults => ErrorKind::NoResults,
            SearchError::InvalidQuery(_) => ErrorKind::Input,
            SearchError::RequestError(_)
            | SearchError::JsonError(_)
            | SearchError::XmlError(_)
            | SearchError::ApiError { .. }
            | SearchError::InvalidPmid { .. } => ErrorKind::Fetch,
        }
    }

    /// Inline text to show in place of results
    ///
    /// Only two messages ever reach the user: the no-results hint and the
    /// generic retry message. Input errors carry their own description.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::NoResults => NO_RESULTS_MESSAGE.to_string(),
            ErrorKind::Fetch => FETCH_FAILED_MESSAGE.to_string(),
            ErrorKind::Input => self.to_string(),
        }
    }
}
