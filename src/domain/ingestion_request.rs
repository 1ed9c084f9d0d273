use std::path::Path;

use super::document::DocumentFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

/// A single summarization input, resolved once from the inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionRequest {
    Text(String),
    Url(String),
    PdfBytes(UploadedFile),
    DocxBytes(UploadedFile),
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported file type: {0}")]
pub struct UnsupportedFileType(pub String);

impl IngestionRequest {
    /// Picks the binary variant from the uploaded filename's extension.
    pub fn from_upload(file: UploadedFile) -> Result<Self, UnsupportedFileType> {
        match DocumentFormat::from_filename(&file.filename) {
            Some(DocumentFormat::Pdf) => Ok(Self::PdfBytes(file)),
            Some(DocumentFormat::Docx) => Ok(Self::DocxBytes(file)),
            None => {
                let extension = Path::new(&file.filename)
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| format!(".{e}"))
                    .unwrap_or_else(|| "(none)".to_string());
                Err(UnsupportedFileType(extension))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Url(_) => "url",
            Self::PdfBytes(_) => "pdf",
            Self::DocxBytes(_) => "docx",
        }
    }
}
