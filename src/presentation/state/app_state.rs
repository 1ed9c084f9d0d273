use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, PageFetcher};
use crate::application::services::SummarizationService;

pub struct AppState<F, P, L>
where
    F: FileLoader,
    P: PageFetcher,
    L: LlmClient,
{
    pub summarization_service: Arc<SummarizationService<F, P, L>>,
    pub max_body_bytes: usize,
}

impl<F, P, L> Clone for AppState<F, P, L>
where
    F: FileLoader,
    P: PageFetcher,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            summarization_service: Arc::clone(&self.summarization_service),
            max_body_bytes: self.max_body_bytes,
        }
    }
}
