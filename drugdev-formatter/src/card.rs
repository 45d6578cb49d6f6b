//! Result cards for individual papers
//!
//! A card is the plain-text rendering of one [`Paper`]:
//!
//! ```text
//! Antibody-drug conjugates: the next wave.
//!   Kyoji Tsuchikama, Zhiqiang An
//!   Nature reviews. Drug discovery · 2024
//!   DOI: 10.1038/s41573-023-00001-x
//!   Antibody-drug conjugates combine ...
//!   https://pubmed.ncbi.nlm.nih.gov/38012345/
//! ```

use std::borrow::Cow;

use drugdev_search::{EtAlPolicy, Paper};

/// Characters of abstract shown on a card
pub const ABSTRACT_DISPLAY_LIMIT: usize = 400;

/// Marker appended to a capped author list
pub const ET_AL: &str = " et al.";

/// Options controlling card output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardConfig {
    /// When to append "et al." to the author line
    pub et_al: EtAlPolicy,
    /// Maximum abstract length in characters before truncation
    pub abstract_limit: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            et_al: EtAlPolicy::default(),
            abstract_limit: ABSTRACT_DISPLAY_LIMIT,
        }
    }
}

impl CardConfig {
    pub fn with_et_al(mut self, et_al: EtAlPolicy) -> Self {
        self.et_al = et_al;
        self
    }

    pub fn with_abstract_limit(mut self, limit: usize) -> Self {
        self.abstract_limit = limit;
        self
    }
}

/// Authors joined by ", ", with " et al." when `policy` says so
///
/// # Example
///
/// ```
/// use drugdev_formatter::author_line;
/// use drugdev_search::{EtAlPolicy, Paper};
///
/// let paper = Paper {
///     pmid: "1".to_string(),
///     title: "T".to_string(),
///     authors: vec!["Jane Smith".to_string(), "Li Wei".to_string()],
///     author_count: 2,
///     abstract_text: "No abstract available".to_string(),
///     journal: "J".to_string(),
///     year: "2024".to_string(),
///     doi: None,
/// };
/// assert_eq!(author_line(&paper, EtAlPolicy::DisplayCap), "Jane Smith, Li Wei");
/// ```
pub fn author_line(paper: &Paper, policy: EtAlPolicy) -> String {
    let mut line = paper.authors.join(", ");
    if paper.shows_et_al(policy) {
        line.push_str(ET_AL);
    }
    line
}

/// Abstract cut to `limit` characters plus "..." when longer
pub fn display_abstract(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => Cow::Owned(format!("{}...", &text[..byte_index])),
        None => Cow::Borrowed(text),
    }
}

/// Plain-text card for one paper
pub fn render_card(paper: &Paper, config: &CardConfig) -> String {
    let mut lines = vec![paper.title.clone()];

    if !paper.authors.is_empty() {
        lines.push(format!("  {}", author_line(paper, config.et_al)));
    }

    lines.push(format!("  {} · {}", paper.journal, paper.year));

    if let Some(doi) = &paper.doi {
        lines.push(format!("  DOI: {doi}"));
    }

    lines.push(format!(
        "  {}",
        display_abstract(&paper.abstract_text, config.abstract_limit)
    ));
    lines.push(format!("  {}", paper.pubmed_url()));

    lines.join("\n")
}
