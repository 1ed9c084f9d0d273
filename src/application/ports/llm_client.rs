use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error("{0}")]
    ProviderError(String),
    #[error("network failure: {0}")]
    NetworkFailed(String),
    #[error("unexpected response shape: {0}")]
    UnexpectedResponseShape(String),
}
