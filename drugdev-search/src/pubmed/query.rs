//! Search query construction
//!
//! Every search is scoped to drug-development literature: the user's text is
//! conjoined with [`DRUG_DEVELOPMENT_FILTER`] before it reaches ESearch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Fixed term restricting results to drug-development research
pub const DRUG_DEVELOPMENT_FILTER: &str = "(\"drug development\"[Title/Abstract] OR \"drug discovery\"[Title/Abstract] OR \"clinical trial\"[Title/Abstract] OR \"pharmaceutical\"[Title/Abstract] OR \"drug design\"[Title/Abstract])";

/// Number of results requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// All selectable page sizes, smallest first
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn as_usize(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = SearchError;

    fn try_from(value: usize) -> Result<Self> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.as_usize() == value)
            .ok_or_else(|| {
                SearchError::InvalidQuery(format!(
                    "unsupported page size {value} (expected 10, 20, 50 or 100)"
                ))
            })
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_usize())
    }
}

/// Result ordering applied by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Best match first
    #[default]
    Relevance,
    /// Most recently published first
    PublicationDate,
}

impl SortOrder {
    /// Value of the ESearch `sort` parameter
    pub fn as_api_param(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PublicationDate => "pub_date",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" => Ok(SortOrder::Relevance),
            "pub_date" | "pub-date" | "date" => Ok(SortOrder::PublicationDate),
            other => Err(SearchError::InvalidQuery(format!(
                "unsupported sort order '{other}' (expected relevance or pub_date)"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_param())
    }
}

/// A provider search request produced by [`SearchQuery::build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Unencoded search term, user text conjoined with the domain filter
    pub term: String,
    pub page_size: PageSize,
    pub sort: SortOrder,
}

impl SearchRequest {
    /// URL-encoded search term
    pub fn encoded_term(&self) -> String {
        urlencoding::encode(&self.term).into_owned()
    }

    /// ESearch query parameters in request order, values already encoded
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("db", "pubmed".to_string()),
            ("term", self.encoded_term()),
            ("retmax", self.page_size.as_usize().to_string()),
            ("retmode", "json".to_string()),
            ("sort", self.sort.as_api_param().to_string()),
        ]
    }
}

/// Builder turning user input and selections into a [`SearchRequest`]
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    text: String,
    page_size: PageSize,
    sort: SortOrder,
}

impl SearchQuery {
    /// Start a query from free text
    ///
    /// # Example
    ///
    /// ```
    /// use drugdev_search::{PageSize, SearchQuery, SortOrder};
    ///
    /// let request = SearchQuery::new("cancer immunotherapy")
    ///     .page_size(PageSize::Twenty)
    ///     .sort(SortOrder::PublicationDate)
    ///     .build()
    ///     .expect("non-empty query");
    ///
    /// assert!(request.term.contains("cancer immunotherapy"));
    /// assert_eq!(request.page_size.as_usize(), 20);
    /// ```
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether building would be a no-op
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Build the provider request, or `None` for empty/whitespace-only text
    ///
    /// Surrounding whitespace is dropped; everything between is kept as typed.
    pub fn build(&self) -> Option<SearchRequest> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }

        Some(SearchRequest {
            term: format!("({text}) AND {DRUG_DEVELOPMENT_FILTER}"),
            page_size: self.page_size,
            sort: self.sort,
        })
    }
}
