mod file_loader;
mod llm_client;
mod page_fetcher;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use page_fetcher::{PageFetcher, PageFetcherError};
