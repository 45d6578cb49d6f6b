//! PubMed search pipeline
//!
//! This module turns user input into an ESearch request, runs the
//! ESearch + EFetch calls against NCBI E-utilities and parses the EFetch
//! XML into [`Paper`] records.

pub mod client;
pub mod models;
pub mod parser;
pub mod query;
pub(crate) mod responses;

// Re-export public types
pub use client::PaperSearchClient;
pub use models::{
    EtAlPolicy, IdSearch, MAX_DISPLAY_AUTHORS, NO_ABSTRACT, Paper, SearchOutcome, UNKNOWN_JOURNAL,
    UNKNOWN_YEAR,
};
pub use parser::{paper_from_article, parse_papers};
pub use query::{DRUG_DEVELOPMENT_FILTER, PageSize, SearchQuery, SearchRequest, SortOrder};
