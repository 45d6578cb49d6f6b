//! Session state machine driven against a mocked provider

mod common;

use std::time::Duration;

use common::{
    article, article_set, create_mock_client, esearch_body, mount_efetch, mount_efetch_status,
    mount_esearch, three_articles,
};
use drugdev_search::{
    FETCH_FAILED_MESSAGE, PageSize, SearchSession, SearchState, SortOrder,
};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_run_success() {
    let server = MockServer::start().await;
    mount_esearch(&server, esearch_body(&["101", "102", "103"], 3)).await;
    mount_efetch(&server, three_articles()).await;
    let client = create_mock_client(&server);

    let mut session = SearchSession::new();
    session.set_query("cancer immunotherapy");
    session.set_page_size(PageSize::Twenty);
    session.set_sort(SortOrder::Relevance);

    let state = session.run(&client).await.expect("query is not blank");
    match state {
        SearchState::Success {
            total_count,
            papers,
        } => {
            assert_eq!(*total_count, 3);
            assert_eq!(papers.len(), 3);
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_run_blank_query_issues_no_request() {
    let server = MockServer::start().await;
    let client = create_mock_client(&server);

    let mut session = SearchSession::new();
    session.set_query(" \t ");

    assert!(session.run(&client).await.is_none());
    assert_eq!(session.state(), &SearchState::Idle);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_run_no_results() {
    let server = MockServer::start().await;
    mount_esearch(&server, esearch_body(&[], 0)).await;
    let client = create_mock_client(&server);

    let mut session = SearchSession::new();
    session.set_query("nonexistent compound");

    let state = session.run(&client).await.unwrap();
    assert_eq!(state, &SearchState::NoResults);
    assert!(state.papers().is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_run_detail_fetch_failure() {
    let server = MockServer::start().await;
    mount_esearch(&server, esearch_body(&["101"], 1)).await;
    mount_efetch_status(&server, 503).await;
    let client = create_mock_client(&server);

    let mut session = SearchSession::new();
    session.set_query("aspirin");

    let state = session.run(&client).await.unwrap();
    assert_eq!(
        state,
        &SearchState::Failed {
            message: FETCH_FAILED_MESSAGE.to_string()
        }
    );
    assert!(logs_contain("Search failed"));
}

/// A slow response to an older submission must not replace fresher results
#[tokio::test]
#[traced_test]
async fn test_slow_stale_response_is_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retmax", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(esearch_body(&["201"], 1))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retmax", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_body(&["202"], 1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "201"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(article_set(&[article("201", "Stale", &[], None)])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", "202"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(article_set(&[article("202", "Fresh", &[], None)])),
        )
        .mount(&server)
        .await;

    let client = create_mock_client(&server);
    let mut session = SearchSession::new();
    session.set_query("aspirin");

    let slow = session.submit().unwrap();
    session.set_page_size(PageSize::Twenty);
    let fast = session.submit().unwrap();

    let (slow_result, fast_result) =
        tokio::join!(client.search(&slow.request), client.search(&fast.request));

    // Fresh response lands first, stale one afterwards
    assert!(session.apply(fast.token, fast_result));
    assert!(!session.apply(slow.token, slow_result));

    let titles: Vec<&str> = session
        .state()
        .papers()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Fresh"]);
}
