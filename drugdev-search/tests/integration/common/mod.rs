//! Shared fixtures and helpers for mocked provider tests

#![allow(dead_code)]

use drugdev_search::{ClientConfig, PaperSearchClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// ESearch JSON body for the given identifiers and total count
pub fn esearch_body(ids: &[&str], count: usize) -> String {
    serde_json::json!({
        "header": {"type": "esearch", "version": "0.3"},
        "esearchresult": {
            "count": count.to_string(),
            "retmax": ids.len().to_string(),
            "retstart": "0",
            "idlist": ids,
        }
    })
    .to_string()
}

/// One `PubmedArticle` element
pub fn article(pmid: &str, title: &str, authors: &[(&str, &str)], doi: Option<&str>) -> String {
    let authors: String = authors
        .iter()
        .map(|(fore, last)| {
            format!("<Author><LastName>{last}</LastName><ForeName>{fore}</ForeName></Author>")
        })
        .collect();
    let doi = doi
        .map(|d| format!(r#"<ELocationID EIdType="doi" ValidYN="Y">{d}</ELocationID>"#))
        .unwrap_or_default();

    format!(
        r#"<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">{pmid}</PMID>
        <Article PubModel="Print-Electronic">
            <Journal>
                <JournalIssue CitedMedium="Internet">
                    <PubDate><Year>2023</Year><Month>Jun</Month></PubDate>
                </JournalIssue>
                <Title>Journal of Drug Development</Title>
            </Journal>
            <ArticleTitle>{title}</ArticleTitle>
            {doi}
            <Abstract><AbstractText>Abstract for {pmid}.</AbstractText></Abstract>
            <AuthorList CompleteYN="Y">{authors}</AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>"#
    )
}

/// Wrap articles in a `PubmedArticleSet` document
pub fn article_set(articles: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" ?>\n<!DOCTYPE PubmedArticleSet PUBLIC \"-//NLM//DTD PubMedArticle, 1st January 2024//EN\" \"https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd\">\n<PubmedArticleSet>\n{}\n</PubmedArticleSet>",
        articles.join("\n")
    )
}

/// Three well-formed articles with PMIDs 101, 102, 103
pub fn three_articles() -> String {
    article_set(&[
        article(
            "101",
            "PD-1 blockade in melanoma",
            &[("Ana", "Lopez"), ("Ben", "Okafor")],
            Some("10.1000/pd1"),
        ),
        article("102", "CAR-T manufacturing at scale", &[("Chen", "Wei")], None),
        article(
            "103",
            "Bispecific antibodies in solid tumours",
            &[("Dana", "Kim")],
            Some("10.1000/bsab"),
        ),
    ])
}

/// Mount an ESearch mock answering with `body`
pub async fn mount_esearch(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}

/// Mount an EFetch mock answering with `body`
pub async fn mount_efetch(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/xml"),
        )
        .mount(server)
        .await;
}

/// Mount an EFetch mock answering with `status`
pub async fn mount_efetch_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Client pointing at a mock server
pub fn create_mock_client(server: &MockServer) -> PaperSearchClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_rate_limit(100.0); // High rate limit for tests

    PaperSearchClient::with_config(config).unwrap()
}
