use crate::domain::NormalizedDocument;

use super::ingestion_service::IngestionError;

/// Pasted text passes through unchanged apart from trimming its edges.
pub fn normalize_plain_text(input: &str) -> Result<NormalizedDocument, IngestionError> {
    NormalizedDocument::new(input.trim()).map_err(|_| IngestionError::EmptyInput)
}
