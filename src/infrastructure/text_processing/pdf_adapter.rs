use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::sanitize_extracted_text;

pub(crate) const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the raw text of every page, in page order. Image-only pages
    /// yield empty strings.
    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        if page_count == 0 {
            return Err(FileLoaderError::ExtractionFailed(
                "PDF has no pages".to_string(),
            ));
        }

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    tracing::debug!(page_index, error = %e, "Page yielded no text");
                    pages.push(String::new());
                }
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(filename = %document.filename, size_bytes = document.size_bytes)
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != DocumentFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFileType(
                document.format.as_mime().to_string(),
            ));
        }

        // Dropped when this call returns, which deletes the file.
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();

        let sanitized_pages: Vec<String> = pages
            .iter()
            .map(|p| sanitize_extracted_text(p))
            .filter(|t| !t.is_empty())
            .collect();

        tracing::info!(
            page_count,
            pages_with_text = sanitized_pages.len(),
            "PDF text extraction complete"
        );

        if sanitized_pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(sanitized_pages.join("\n\n"))
    }
}
