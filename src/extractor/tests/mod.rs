use std::fs;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::extractor::{MIN_ARTICLE_CHARS, Strategy, extract};

async fn serve_fixture(name: &str) -> (MockServer, String) {
    let html = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html, "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/article", server.uri());
    (server, url)
}

#[tokio::test]
async fn news_page_wins_on_first_strategy() {
    let (server, url) = serve_fixture("article.html").await;

    let article = extract(&url).await.unwrap();

    assert_eq!(article.strategy, Strategy::Readability);
    assert!(article.chars > MIN_ARTICLE_CHARS);
    assert!(article.text.contains("benchmark interest rate unchanged"));
    assert!(article.text.contains("disinflation seen in goods"));
    // Boilerplate around the article body must not survive.
    assert!(!article.text.contains("tracking"));

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn paywall_stub_exhausts_every_strategy() {
    let (server, url) = serve_fixture("stub.html").await;

    let err = extract(&url).await.unwrap_err();

    assert_eq!(err.url, url);
    assert_eq!(err.attempts.len(), 3);
    assert_eq!(err.attempts[0].strategy, Strategy::Readability);
    assert_eq!(err.attempts[1].strategy, Strategy::Paragraphs);
    assert_eq!(err.attempts[2].strategy, Strategy::ContentZones);

    // One fetch per strategy.
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn unreachable_server_reports_all_attempts() {
    let server = MockServer::start().await;
    let url = format!("{}/article", server.uri());
    drop(server);

    let err = extract(&url).await.unwrap_err();
    assert_eq!(err.attempts.len(), 3);
}
