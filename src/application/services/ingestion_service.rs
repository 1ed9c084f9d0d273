use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, PageFetcher, PageFetcherError};
use crate::domain::{Document, DocumentFormat, IngestionRequest, NormalizedDocument, UploadedFile};

use super::plain_text::normalize_plain_text;

/// Routes an [`IngestionRequest`] to exactly one extractor. A failed
/// extraction is reported as is; no other format is attempted.
pub struct IngestionService<F, P>
where
    F: FileLoader,
    P: PageFetcher,
{
    file_loader: Arc<F>,
    page_fetcher: Arc<P>,
}

impl<F, P> IngestionService<F, P>
where
    F: FileLoader,
    P: PageFetcher,
{
    pub fn new(file_loader: Arc<F>, page_fetcher: Arc<P>) -> Self {
        Self {
            file_loader,
            page_fetcher,
        }
    }

    #[tracing::instrument(skip(self, request), fields(kind = request.kind()))]
    pub async fn ingest(
        &self,
        request: IngestionRequest,
    ) -> Result<NormalizedDocument, IngestionError> {
        let document = match request {
            IngestionRequest::Text(text) => normalize_plain_text(&text)?,
            IngestionRequest::Url(url) => self.fetch_page(&url).await?,
            IngestionRequest::PdfBytes(file) => self.load_file(file, DocumentFormat::Pdf).await?,
            IngestionRequest::DocxBytes(file) => {
                self.load_file(file, DocumentFormat::Docx).await?
            }
        };

        tracing::info!(chars = document.char_count(), "Input normalized");
        Ok(document)
    }

    async fn fetch_page(&self, url: &str) -> Result<NormalizedDocument, IngestionError> {
        let text = self.page_fetcher.fetch_text(url).await?;

        NormalizedDocument::new(text).map_err(|_| {
            IngestionError::ExtractionFailed(FileLoaderError::NoTextFound(url.to_string()))
        })
    }

    async fn load_file(
        &self,
        file: UploadedFile,
        format: DocumentFormat,
    ) -> Result<NormalizedDocument, IngestionError> {
        let document = Document::new(file.filename, format, file.data.len() as u64);

        let text = self
            .file_loader
            .extract_text(&file.data, &document)
            .await?;

        NormalizedDocument::new(text).map_err(|_| {
            IngestionError::ExtractionFailed(FileLoaderError::NoTextFound(document.filename))
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("input is empty")]
    EmptyInput,
    #[error("extraction: {0}")]
    ExtractionFailed(#[from] FileLoaderError),
    #[error("fetch: {0}")]
    FetchFailed(#[from] PageFetcherError),
}
