//! Integration tests for `PageFetcher`.
//!
//! Each test stands up a local `wiremock` server, so no real network
//! traffic is made.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadscope_fetch::{FetchError, PageFetcher};

fn test_fetcher() -> PageFetcher {
    PageFetcher::new(5, "leadscope-test/0.1").expect("failed to build test PageFetcher")
}

#[tokio::test]
async fn fetch_returns_body_and_status_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<!DOCTYPE html><title>Hola</title>"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let page = test_fetcher().fetch(&url).await.expect("expected Ok");

    assert_eq!(page.http_status, 200);
    assert_eq!(page.url, url);
    assert!(page.body.contains("<title>Hola</title>"));
}

#[tokio::test]
async fn fetch_sends_configured_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "leadscope-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_fetcher().fetch(&server.uri()).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn non_success_status_becomes_fetch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let failure = test_fetcher()
        .fetch(&server.uri())
        .await
        .expect_err("expected FetchFailure");

    assert_eq!(failure.url, server.uri());
    assert!(failure.reason.contains("503"), "reason: {}", failure.reason);
}

#[tokio::test]
async fn not_found_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_fetcher().fetch_page(&server.uri()).await;
    assert!(
        matches!(result, Err(FetchError::UnexpectedStatus { status: 404, .. })),
        "expected UnexpectedStatus(404), got: {result:?}"
    );
}

#[tokio::test]
async fn invalid_url_becomes_fetch_failure() {
    let failure = test_fetcher()
        .fetch("ftp://tienda.mx")
        .await
        .expect_err("expected FetchFailure");
    assert!(failure.reason.contains("invalid URL"), "reason: {}", failure.reason);
}

#[tokio::test]
async fn connection_refused_becomes_fetch_failure() {
    let uri = "http://127.0.0.1:9";

    let failure = test_fetcher()
        .fetch(uri)
        .await
        .expect_err("expected FetchFailure");
    assert_eq!(failure.url, uri);
    assert!(failure.reason.starts_with("HTTP error"), "reason: {}", failure.reason);
}

#[tokio::test]
async fn redirect_records_final_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>moved</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_fetcher()
        .fetch(&format!("{}/old", server.uri()))
        .await
        .expect("expected Ok");

    assert_eq!(page.url, format!("{}/new", server.uri()));
    assert_eq!(page.http_status, 200);
    assert!(page.body.contains("moved"));
}
