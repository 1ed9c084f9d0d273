use std::sync::Arc;

use crate::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError, PageFetcher, PageFetcherError,
};
use crate::domain::IngestionRequest;

use super::ingestion_service::{IngestionError, IngestionService};
use super::prompt_builder::build_summary_prompt;

pub struct SummarizationService<F, P, L>
where
    F: FileLoader,
    P: PageFetcher,
    L: LlmClient,
{
    ingestion_service: IngestionService<F, P>,
    llm_client: Arc<L>,
}

impl<F, P, L> SummarizationService<F, P, L>
where
    F: FileLoader,
    P: PageFetcher,
    L: LlmClient,
{
    pub fn new(ingestion_service: IngestionService<F, P>, llm_client: Arc<L>) -> Self {
        Self {
            ingestion_service,
            llm_client,
        }
    }

    /// Extracts the input, builds the prompt and asks the provider for a
    /// summary. The provider is only called once extraction has produced text.
    pub async fn summarize(&self, request: IngestionRequest) -> Result<String, SummarizeError> {
        let document = self.ingestion_service.ingest(request).await?;
        let prompt = build_summary_prompt(&document);

        let summary = self.llm_client.complete(&prompt).await?;

        tracing::info!(summary_chars = summary.len(), "Summary generated");
        Ok(summary)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("input is empty")]
    EmptyInput,
    #[error("extraction failed: {0}")]
    ExtractionFailed(FileLoaderError),
    #[error("fetch failed: {0}")]
    FetchFailed(PageFetcherError),
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error("provider error: {0}")]
    ProviderError(String),
    #[error("network failure: {0}")]
    NetworkFailed(String),
    #[error("unexpected response shape: {0}")]
    UnexpectedResponseShape(String),
}

impl From<IngestionError> for SummarizeError {
    fn from(error: IngestionError) -> Self {
        match error {
            IngestionError::EmptyInput => Self::EmptyInput,
            IngestionError::ExtractionFailed(e) => Self::ExtractionFailed(e),
            IngestionError::FetchFailed(e) => Self::FetchFailed(e),
        }
    }
}

impl From<LlmClientError> for SummarizeError {
    fn from(error: LlmClientError) -> Self {
        match error {
            LlmClientError::AuthenticationFailed(m) => Self::AuthenticationFailed(m),
            LlmClientError::ProviderError(m) => Self::ProviderError(m),
            LlmClientError::NetworkFailed(m) => Self::NetworkFailed(m),
            LlmClientError::UnexpectedResponseShape(m) => Self::UnexpectedResponseShape(m),
        }
    }
}
