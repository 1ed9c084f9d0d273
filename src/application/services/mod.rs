mod ingestion_service;
mod plain_text;
mod prompt_builder;
mod summarization_service;

pub use ingestion_service::{IngestionError, IngestionService};
pub use plain_text::normalize_plain_text;
pub use prompt_builder::{DOCUMENT_DELIMITER, build_summary_prompt};
pub use summarization_service::{SummarizationService, SummarizeError};
