use async_trait::async_trait;

/// Retrieves a web page and reduces it to its visible text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, PageFetcherError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PageFetcherError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    HttpStatus(u16),
    #[error("not an html page: {0}")]
    NotHtml(String),
}
