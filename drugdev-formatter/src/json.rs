//! JSON output for scripts and other front ends
//!
//! Each paper keeps its raw fields and gains the display strings a card
//! would show, so consumers do not need to reimplement the display rules.

use drugdev_search::{Paper, SearchState};
use serde_json::{Value, json};

use crate::card::{CardConfig, author_line, display_abstract};
use crate::state::render_summary;

/// One paper with display fields
pub fn paper_to_json(paper: &Paper, config: &CardConfig) -> Value {
    let mut value = json!({
        "pmid": paper.pmid,
        "title": paper.title,
        "authors": paper.authors,
        "author_count": paper.author_count,
        "author_line": author_line(paper, config.et_al),
        "journal": paper.journal,
        "year": paper.year,
        "abstract": paper.abstract_text,
        "abstract_display": display_abstract(&paper.abstract_text, config.abstract_limit),
        "url": paper.pubmed_url(),
    });

    if let (Some(doi), Some(map)) = (paper.doi.as_ref(), value.as_object_mut()) {
        map.insert("doi".to_string(), json!(doi));
        map.insert("doi_url".to_string(), json!(format!("https://doi.org/{doi}")));
    }

    value
}

/// Array of papers with display fields
pub fn papers_to_json(papers: &[Paper], config: &CardConfig) -> Value {
    Value::Array(papers.iter().map(|p| paper_to_json(p, config)).collect())
}

/// Whole results area as JSON
pub fn state_to_json(state: &SearchState, config: &CardConfig) -> Value {
    match state {
        SearchState::Success {
            total_count,
            papers,
        } => json!({
            "state": "success",
            "summary": render_summary(*total_count, papers.len()),
            "total_count": total_count,
            "papers": papers_to_json(papers, config),
        }),
        SearchState::Failed { message } => json!({
            "state": "failed",
            "message": message,
        }),
        other => serde_json::to_value(other).unwrap_or(Value::Null),
    }
}
