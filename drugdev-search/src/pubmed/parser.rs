//! EFetch XML to [`Paper`] records
//!
//! Each `PubmedArticle` node becomes at most one [`Paper`]. Missing optional
//! fields fall back to placeholders; an article without a title or a PMID is
//! dropped without failing the batch.

use tracing::{debug, instrument};

use crate::common::xml::{XmlNode, parse_document};
use crate::error::Result;
use crate::pubmed::models::{
    MAX_DISPLAY_AUTHORS, NO_ABSTRACT, Paper, UNKNOWN_JOURNAL, UNKNOWN_YEAR,
};

/// Parse an EFetch response into papers, keeping document order
///
/// # Errors
///
/// Returns [`SearchError::XmlError`](crate::SearchError::XmlError) when the
/// payload is not well-formed XML.
///
/// # Example
///
/// ```
/// use drugdev_search::parse_papers;
///
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <Journal><Title>Example Journal</Title></Journal>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let papers = parse_papers(xml)?;
/// assert_eq!(papers[0].title, "Example Article");
/// assert_eq!(papers[0].year, "N/A");
/// # Ok::<(), drugdev_search::SearchError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_papers(xml: &str) -> Result<Vec<Paper>> {
    let root = parse_document(xml)?;

    let mut papers = Vec::new();
    let mut dropped = 0usize;

    for article in root.descendants("PubmedArticle") {
        match paper_from_article(article) {
            Some(paper) => papers.push(paper),
            None => dropped += 1,
        }
    }

    debug!(parsed = papers.len(), dropped, "Parsed EFetch articles");
    Ok(papers)
}

/// Build a paper from one `PubmedArticle` node
pub fn paper_from_article(article: &XmlNode) -> Option<Paper> {
    let pmid = article.first_text("PMID");
    let title = article.first_text("ArticleTitle");

    let (pmid, title) = match (pmid, title) {
        (Some(pmid), Some(title)) => (pmid, title),
        (pmid, title) => {
            debug!(
                has_pmid = pmid.is_some(),
                has_title = title.is_some(),
                "Dropping article without title or PMID"
            );
            return None;
        }
    };

    let names = author_names(article);
    let author_count = names.len();
    let authors = names.into_iter().take(MAX_DISPLAY_AUTHORS).collect();

    Some(Paper {
        pmid,
        title,
        authors,
        author_count,
        abstract_text: article
            .first_text("AbstractText")
            .unwrap_or_else(|| NO_ABSTRACT.to_string()),
        journal: article
            .first("Journal")
            .and_then(|journal| journal.first_text("Title"))
            .unwrap_or_else(|| UNKNOWN_JOURNAL.to_string()),
        year: article
            .first("PubDate")
            .and_then(|date| date.first_text("Year"))
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
        doi: doi(article),
    })
}

/// Display names of every named author, in document order
fn author_names(article: &XmlNode) -> Vec<String> {
    article
        .descendants("Author")
        .filter_map(|author| {
            let fore = author.first_text("ForeName").unwrap_or_default();
            let last = author.first_text("LastName").unwrap_or_default();
            let name = format!("{fore} {last}").trim().to_string();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

fn doi(article: &XmlNode) -> Option<String> {
    article
        .descendants("ELocationID")
        .find(|node| node.attr("EIdType") == Some("doi"))
        .map(XmlNode::text)
        .filter(|doi| !doi.is_empty())
}
