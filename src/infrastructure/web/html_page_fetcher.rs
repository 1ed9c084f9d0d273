use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::application::ports::{PageFetcher, PageFetcherError};

use super::html_text::extract_visible_text;

const HTML_MIME_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Fetches a page with a single GET; redirects follow the client default
/// and nothing is retried.
pub struct HtmlPageFetcher {
    client: Client,
}

impl HtmlPageFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

fn is_html(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    HTML_MIME_TYPES.contains(&essence.as_str())
}

#[async_trait]
impl PageFetcher for HtmlPageFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch_text(&self, url: &str) -> Result<String, PageFetcherError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| PageFetcherError::InvalidUrl(format!("{url}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PageFetcherError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| PageFetcherError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Page fetch returned non-success status");
            return Err(PageFetcherError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_html(&content_type) {
            return Err(PageFetcherError::NotHtml(if content_type.is_empty() {
                "missing content type".to_string()
            } else {
                content_type
            }));
        }

        let html = response
            .text()
            .await
            .map_err(|e| PageFetcherError::Network(e.to_string()))?;

        let text = extract_visible_text(&html);
        tracing::info!(
            html_bytes = html.len(),
            text_chars = text.len(),
            "Page text extracted"
        );

        Ok(text)
    }
}
