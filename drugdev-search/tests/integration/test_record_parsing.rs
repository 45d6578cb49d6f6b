//! Fixture-based RecordParser tests (no network)

use drugdev_search::{
    EtAlPolicy, MAX_DISPLAY_AUTHORS, NO_ABSTRACT, UNKNOWN_JOURNAL, UNKNOWN_YEAR, parse_papers,
};
use rstest::rstest;

/// Realistic EFetch payload: a full record, a six-author record without a
/// DOI, a record missing its title and a record with inline markup
const EFETCH_FIXTURE: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2024//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd">
<PubmedArticleSet>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM" IndexingMethod="Automated">
        <PMID Version="1">38012345</PMID>
        <DateCompleted><Year>2024</Year><Month>01</Month><Day>15</Day></DateCompleted>
        <Article PubModel="Print-Electronic">
            <Journal>
                <ISSN IssnType="Electronic">1474-1784</ISSN>
                <JournalIssue CitedMedium="Internet">
                    <Volume>23</Volume>
                    <Issue>1</Issue>
                    <PubDate><Year>2024</Year><Month>Jan</Month></PubDate>
                </JournalIssue>
                <Title>Nature reviews. Drug discovery</Title>
                <ISOAbbreviation>Nat Rev Drug Discov</ISOAbbreviation>
            </Journal>
            <ArticleTitle>Antibody-drug conjugates: the next wave.</ArticleTitle>
            <Pagination><MedlinePgn>12-30</MedlinePgn></Pagination>
            <ELocationID EIdType="doi" ValidYN="Y">10.1038/s41573-023-00001-x</ELocationID>
            <Abstract>
                <AbstractText>Antibody-drug conjugates combine the selectivity of antibodies with potent payloads.</AbstractText>
            </Abstract>
            <AuthorList CompleteYN="Y">
                <Author ValidYN="Y"><LastName>Tsuchikama</LastName><ForeName>Kyoji</ForeName><Initials>K</Initials></Author>
                <Author ValidYN="Y"><LastName>An</LastName><ForeName>Zhiqiang</ForeName><Initials>Z</Initials></Author>
            </AuthorList>
        </Article>
        <CommentsCorrectionsList>
            <CommentsCorrections RefType="Cites"><RefSource>Cancer Res. 2020</RefSource><PMID Version="1">31111111</PMID></CommentsCorrections>
        </CommentsCorrectionsList>
    </MedlineCitation>
    <PubmedData>
        <ArticleIdList>
            <ArticleId IdType="pubmed">38012345</ArticleId>
            <ArticleId IdType="doi">10.1038/s41573-023-00001-x</ArticleId>
        </ArticleIdList>
    </PubmedData>
</PubmedArticle>
<PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
        <PMID Version="1">38023456</PMID>
        <Article PubModel="Electronic">
            <Journal>
                <JournalIssue CitedMedium="Internet"><PubDate><Year>2023</Year></PubDate></JournalIssue>
                <Title>Clinical pharmacology and therapeutics</Title>
            </Journal>
            <ArticleTitle>Model-informed drug development in oncology.</ArticleTitle>
            <AuthorList CompleteYN="Y">
                <Author><LastName>Alpha</LastName><ForeName>Ann</ForeName></Author>
                <Author><LastName>Beta</LastName><ForeName>Bo</ForeName></Author>
                <Author><LastName>Gamma</LastName><ForeName>Cy</ForeName></Author>
                <Author><LastName>Delta</LastName><ForeName>Di</ForeName></Author>
                <Author><LastName>Epsilon</LastName><ForeName>Ed</ForeName></Author>
                <Author><LastName>Zeta</LastName><ForeName>Fay</ForeName></Author>
            </AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>
<PubmedArticle>
    <MedlineCitation Status="In-Process" Owner="NLM">
        <PMID Version="1">38034567</PMID>
        <Article PubModel="Print">
            <Journal><Title>Orphan Journal</Title></Journal>
        </Article>
    </MedlineCitation>
</PubmedArticle>
<PubmedArticle>
    <MedlineCitation Status="Publisher" Owner="NLM">
        <PMID Version="1">38045678</PMID>
        <Article PubModel="Electronic-eCollection">
            <ArticleTitle>CO<sub>2</sub> &amp; pH effects on <i>in vitro</i> stability</ArticleTitle>
            <AuthorList>
                <Author><CollectiveName>ADC Stability Consortium</CollectiveName></Author>
            </AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

#[test]
fn test_fixture_record_count_and_order() {
    let papers = parse_papers(EFETCH_FIXTURE).unwrap();
    let ids: Vec<&str> = papers.iter().map(|p| p.pmid.as_str()).collect();
    assert_eq!(ids, vec!["38012345", "38023456", "38045678"]);
}

#[test]
fn test_full_record_fields() {
    let papers = parse_papers(EFETCH_FIXTURE).unwrap();
    let adc = &papers[0];

    assert_eq!(adc.title, "Antibody-drug conjugates: the next wave.");
    assert_eq!(adc.journal, "Nature reviews. Drug discovery");
    assert_eq!(adc.year, "2024");
    assert_eq!(adc.doi.as_deref(), Some("10.1038/s41573-023-00001-x"));
    assert_eq!(adc.authors, vec!["Kyoji Tsuchikama", "Zhiqiang An"]);
    assert!(adc.has_abstract());
    assert_eq!(
        adc.pubmed_url(),
        "https://pubmed.ncbi.nlm.nih.gov/38012345/"
    );
}

#[test]
fn test_six_authors_without_doi() {
    let papers = parse_papers(EFETCH_FIXTURE).unwrap();
    let midd = &papers[1];

    assert_eq!(midd.authors.len(), MAX_DISPLAY_AUTHORS);
    assert_eq!(midd.authors.last().map(String::as_str), Some("Ed Epsilon"));
    assert_eq!(midd.author_count, 6);
    assert!(midd.shows_et_al(EtAlPolicy::DisplayCap));
    assert!(midd.shows_et_al(EtAlPolicy::TrueCount));
    assert_eq!(midd.doi, None);
    assert_eq!(midd.abstract_text, NO_ABSTRACT);
}

#[test]
fn test_inline_markup_and_defaults() {
    let papers = parse_papers(EFETCH_FIXTURE).unwrap();
    let stability = &papers[2];

    assert_eq!(stability.title, "CO2 & pH effects on in vitro stability");
    assert_eq!(stability.journal, UNKNOWN_JOURNAL);
    assert_eq!(stability.year, UNKNOWN_YEAR);
    assert!(stability.authors.is_empty());
    assert_eq!(stability.author_count, 0);
}

/// The record without a title never surfaces
#[test]
fn test_untitled_record_dropped() {
    let papers = parse_papers(EFETCH_FIXTURE).unwrap();
    assert!(papers.iter().all(|p| p.pmid != "38034567"));
    assert!(papers.iter().all(|p| !p.title.is_empty() && !p.pmid.is_empty()));
}

#[rstest]
#[case(0, 0, false)]
#[case(4, 4, false)]
#[case(5, 5, true)]
#[case(6, 5, true)]
#[case(12, 5, true)]
fn test_author_cap_and_display_cap_marker(
    #[case] raw: usize,
    #[case] kept: usize,
    #[case] et_al: bool,
) {
    let authors: String = (0..raw)
        .map(|i| format!("<Author><LastName>L{i}</LastName><ForeName>F{i}</ForeName></Author>"))
        .collect();
    let xml = format!(
        "<PubmedArticleSet><PubmedArticle><MedlineCitation><PMID>1</PMID><Article><ArticleTitle>T</ArticleTitle><AuthorList>{authors}</AuthorList></Article></MedlineCitation></PubmedArticle></PubmedArticleSet>"
    );

    let paper = &parse_papers(&xml).unwrap()[0];
    assert_eq!(paper.authors.len(), kept);
    assert_eq!(paper.author_count, raw);
    assert_eq!(paper.shows_et_al(EtAlPolicy::DisplayCap), et_al);
}
