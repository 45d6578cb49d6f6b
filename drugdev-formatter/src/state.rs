//! Text for every [`SearchState`]

use drugdev_search::{NO_RESULTS_MESSAGE, Paper, SearchState};
use tracing::debug;

use crate::card::{CardConfig, render_card};

/// Shown before the first submission
pub const IDLE_MESSAGE: &str = "Enter a search term to find drug development research papers.";

/// Shown while the provider calls are in flight
pub const SEARCHING_MESSAGE: &str = "Searching PubMed...";

/// Result count line, e.g. "Found 3 research papers (showing 3)"
pub fn render_summary(total_count: usize, shown: usize) -> String {
    format!("Found {total_count} research papers (showing {shown})")
}

/// Numbered cards separated by blank lines
pub fn render_results(papers: &[Paper], config: &CardConfig) -> String {
    papers
        .iter()
        .enumerate()
        .map(|(i, paper)| format!("{}. {}", i + 1, render_card(paper, config)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full results area for `state`
pub fn render_state(state: &SearchState, config: &CardConfig) -> String {
    match state {
        SearchState::Idle => IDLE_MESSAGE.to_string(),
        SearchState::Searching { .. } => SEARCHING_MESSAGE.to_string(),
        SearchState::Success {
            total_count,
            papers,
        } => {
            debug!(cards = papers.len(), "Rendering result cards");
            let summary = render_summary(*total_count, papers.len());
            if papers.is_empty() {
                summary
            } else {
                format!("{summary}\n\n{}", render_results(papers, config))
            }
        }
        SearchState::NoResults => NO_RESULTS_MESSAGE.to_string(),
        SearchState::Failed { message } => message.clone(),
    }
}
