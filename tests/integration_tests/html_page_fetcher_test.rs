use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fineprint::application::ports::{PageFetcher, PageFetcherError};
use fineprint::infrastructure::web::HtmlPageFetcher;

const USER_AGENT: &str = "fineprint-test";
const CLOSED_PORT_URL: &str = "http://127.0.0.1:1/terms";

fn fetcher() -> HtmlPageFetcher {
    HtmlPageFetcher::new(Duration::from_secs(5), USER_AGENT).unwrap()
}

#[tokio::test]
async fn given_html_page_when_fetching_then_returns_visible_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/privacy"))
        .and(header("user-agent", USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><body><script>track()</script><p>We sell data.</p></body></html>",
            "text/html; charset=utf-8",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let text = fetcher()
        .fetch_text(&format!("{}/privacy", server.uri()))
        .await
        .unwrap();

    assert_eq!(text, "We sell data.");
}

#[tokio::test]
async fn given_not_found_when_fetching_then_returns_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = fetcher()
        .fetch_text(&format!("{}/missing", server.uri()))
        .await;

    assert!(matches!(result, Err(PageFetcherError::HttpStatus(404))));
}

#[tokio::test]
async fn given_json_response_when_fetching_then_returns_not_html() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let result = fetcher().fetch_text(&server.uri()).await;

    assert!(matches!(result, Err(PageFetcherError::NotHtml(ct)) if ct == "application/json"));
}

#[tokio::test]
async fn given_malformed_or_non_http_url_when_fetching_then_returns_invalid_url() {
    for url in ["not a url", "ftp://example.com/terms", "file:///etc/passwd"] {
        let result = fetcher().fetch_text(url).await;

        assert!(matches!(result, Err(PageFetcherError::InvalidUrl(_))), "{url}");
    }
}

#[tokio::test]
async fn given_unreachable_host_when_fetching_then_returns_network_error() {
    let result = fetcher().fetch_text(CLOSED_PORT_URL).await;

    assert!(matches!(result, Err(PageFetcherError::Network(_))));
}
