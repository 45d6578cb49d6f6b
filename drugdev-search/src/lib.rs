//! # Drug-development paper search
//!
//! Searches PubMed for drug-development research and turns the results into
//! display-ready [`Paper`] records.
//!
//! A search is a linear pipeline:
//!
//! 1. [`SearchQuery`] conjoins the user's text with a fixed drug-development
//!    filter and picks the page size and sort order.
//! 2. [`PaperSearchClient`] runs the ESearch identifier search, then one
//!    batch EFetch for exactly those identifiers.
//! 3. [`parse_papers`] walks the EFetch XML and builds normalized records.
//! 4. [`SearchSession`] applies the response to the UI state, ignoring
//!    responses to superseded submissions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use drugdev_search::{PageSize, PaperSearchClient, SearchSession, SearchState, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PaperSearchClient::new()?;
//!     let mut session = SearchSession::new();
//!     session.set_query("cancer immunotherapy");
//!     session.set_page_size(PageSize::Twenty);
//!     session.set_sort(SortOrder::Relevance);
//!
//!     if let Some(SearchState::Success { total_count, papers }) = session.run(&client).await {
//!         println!("Found {} research papers (showing {})", total_count, papers.len());
//!         for paper in papers {
//!             println!("{} ({})", paper.title, paper.year);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod pubmed;
pub mod rate_limit;
pub mod session;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{ErrorKind, FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE, Result, SearchError};
pub use pubmed::{
    DRUG_DEVELOPMENT_FILTER, EtAlPolicy, IdSearch, MAX_DISPLAY_AUTHORS, NO_ABSTRACT, PageSize,
    Paper, PaperSearchClient, SearchOutcome, SearchQuery, SearchRequest, SortOrder,
    UNKNOWN_JOURNAL, UNKNOWN_YEAR, parse_papers,
};
pub use rate_limit::RateLimiter;
pub use session::{SearchSession, SearchState, SearchTicket};
