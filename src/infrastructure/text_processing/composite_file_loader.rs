use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, DocumentFormat};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;

/// Dispatches to the adapter registered for the document's format.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF and DOCX adapters, the formats accepted for upload.
    pub fn with_default_adapters() -> Self {
        Self::new(vec![
            (
                DocumentFormat::Pdf,
                Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>,
            ),
            (DocumentFormat::Docx, Arc::new(DocxAdapter::new())),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            FileLoaderError::UnsupportedFileType(document.format.extension().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
