use serde::{Deserialize, Serialize};

/// Placeholder used when an article has no abstract
pub const NO_ABSTRACT: &str = "No abstract available";

/// Placeholder used when an article has no journal title
pub const UNKNOWN_JOURNAL: &str = "Unknown Journal";

/// Placeholder used when an article has no publication year
pub const UNKNOWN_YEAR: &str = "N/A";

/// Maximum number of author names kept per paper
pub const MAX_DISPLAY_AUTHORS: usize = 5;

/// A normalized research paper built from one `PubmedArticle` node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// PubMed ID
    pub pmid: String,
    /// Article title
    pub title: String,
    /// Display names in document order, at most [`MAX_DISPLAY_AUTHORS`]
    pub authors: Vec<String>,
    /// Number of named authors seen in the record before capping
    pub author_count: usize,
    /// Abstract text, or [`NO_ABSTRACT`]
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Journal title, or [`UNKNOWN_JOURNAL`]
    pub journal: String,
    /// Publication year, or [`UNKNOWN_YEAR`]
    pub year: String,
    /// DOI (Digital Object Identifier)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub doi: Option<String>,
}

impl Paper {
    /// Public PubMed page for this paper
    ///
    /// # Example
    ///
    /// ```
    /// use drugdev_search::Paper;
    ///
    /// let paper = Paper {
    ///     pmid: "31978945".to_string(),
    ///     title: "A pneumonia outbreak".to_string(),
    ///     authors: vec![],
    ///     author_count: 0,
    ///     abstract_text: "No abstract available".to_string(),
    ///     journal: "Nature".to_string(),
    ///     year: "2020".to_string(),
    ///     doi: None,
    /// };
    /// assert_eq!(paper.pubmed_url(), "https://pubmed.ncbi.nlm.nih.gov/31978945/");
    /// ```
    pub fn pubmed_url(&self) -> String {
        format!("https://pubmed.ncbi.nlm.nih.gov/{}/", self.pmid)
    }

    /// Resolver link for the DOI, if the paper has one
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("https://doi.org/{doi}"))
    }

    pub fn has_abstract(&self) -> bool {
        self.abstract_text != NO_ABSTRACT
    }

    /// Whether the author line should end with "et al." under `policy`
    pub fn shows_et_al(&self, policy: EtAlPolicy) -> bool {
        match policy {
            EtAlPolicy::DisplayCap => self.authors.len() == MAX_DISPLAY_AUTHORS,
            EtAlPolicy::TrueCount => self.author_count > self.authors.len(),
        }
    }
}

/// Rule deciding when a capped author list is marked "et al."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EtAlPolicy {
    /// Mark any list that reached the display cap, even when the paper has
    /// exactly five authors
    #[default]
    DisplayCap,
    /// Mark only lists that actually dropped names
    TrueCount,
}

/// Identifiers returned by the identifier search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSearch {
    /// Total matches reported by the provider
    pub total_count: usize,
    /// Identifiers on the requested page, in provider order
    pub ids: Vec<String>,
}

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Total matches reported by the provider
    pub total_count: usize,
    /// Papers parsed from the detail fetch
    pub papers: Vec<Paper>,
}
