#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Drug-development search formatter
//!
//! Turns [`Paper`](drugdev_search::Paper) records and
//! [`SearchState`](drugdev_search::SearchState) values into output:
//!
//! - **Cards**: plain-text result cards with capped author lines, truncated
//!   abstracts and PubMed/DOI links
//! - **State text**: result summary, no-results and failure messages
//! - **JSON**: records plus their display strings

pub mod card;
pub mod json;
pub mod state;

// Re-export main types for convenience
pub use card::{ABSTRACT_DISPLAY_LIMIT, CardConfig, ET_AL, author_line, display_abstract, render_card};
pub use json::{paper_to_json, papers_to_json, state_to_json};
pub use state::{IDLE_MESSAGE, SEARCHING_MESSAGE, render_results, render_state, render_summary};
