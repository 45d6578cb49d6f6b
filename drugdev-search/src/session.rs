//! Search session state machine
//!
//! A session owns the user's inputs and the current [`SearchState`]:
//!
//! ```text
//! Idle -> Searching -> { Success | NoResults | Failed }
//!            ^                       |
//!            +------- submit --------+
//! ```
//!
//! Each accepted submission gets a new token. A response is applied only if
//! it carries the latest token, so a slow response to an older submission
//! can never overwrite the state of a newer one.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ErrorKind, Result};
use crate::pubmed::client::PaperSearchClient;
use crate::pubmed::models::{Paper, SearchOutcome};
use crate::pubmed::query::{PageSize, SearchQuery, SearchRequest, SortOrder};

/// What the results area currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Waiting for the provider; previous results are already cleared
    Searching { token: u64 },
    /// Papers to render
    Success {
        total_count: usize,
        papers: Vec<Paper>,
    },
    /// The identifier search matched nothing
    NoResults,
    /// A provider call failed; `message` is the text to show inline
    Failed { message: String },
}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        matches!(self, SearchState::Searching { .. })
    }

    /// Papers currently on display (empty outside `Success`)
    pub fn papers(&self) -> &[Paper] {
        match self {
            SearchState::Success { papers, .. } => papers,
            _ => &[],
        }
    }
}

/// An accepted submission waiting for its provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub token: u64,
    pub request: SearchRequest,
}

/// Inputs, selections and result state of one search surface
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    page_size: PageSize,
    sort: SortOrder,
    state: SearchState,
    latest_token: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.query = query.into();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Token of the most recent accepted submission (0 before the first)
    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Accept the current inputs as a new search
    ///
    /// Returns `None` and leaves the state untouched when the query is empty
    /// or whitespace-only. Otherwise clears any previous results or error,
    /// enters `Searching` and hands back the request to run.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        let request = SearchQuery::new(self.query.as_str())
            .page_size(self.page_size)
            .sort(self.sort)
            .build()?;

        self.latest_token += 1;
        let token = self.latest_token;
        self.state = SearchState::Searching { token };
        debug!(token, "Search submitted");

        Some(SearchTicket { token, request })
    }

    /// Apply the provider response for the submission `token`
    ///
    /// Returns `false` and changes nothing when `token` is not the latest
    /// one issued.
    pub fn apply(&mut self, token: u64, result: Result<SearchOutcome>) -> bool {
        if token != self.latest_token {
            debug!(
                token,
                latest = self.latest_token,
                "Discarding stale search response"
            );
            return false;
        }

        self.state = match result {
            Ok(SearchOutcome {
                total_count,
                papers,
            }) => {
                info!(total_count, shown = papers.len(), "Showing search results");
                SearchState::Success {
                    total_count,
                    papers,
                }
            }
            Err(err) => match err.kind() {
                ErrorKind::NoResults => SearchState::NoResults,
                ErrorKind::Fetch | ErrorKind::Input => {
                    warn!(error = %err, "Search failed");
                    SearchState::Failed {
                        message: err.user_message(),
                    }
                }
            },
        };

        true
    }

    /// Submit, wait for the provider and apply the response
    ///
    /// Returns `None` when the submission was a no-op.
    pub async fn run(&mut self, client: &PaperSearchClient) -> Option<&SearchState> {
        let SearchTicket { token, request } = self.submit()?;
        let result = client.search(&request).await;
        self.apply(token, result);
        Some(&self.state)
    }
}
