mod document;
mod ingestion_request;
mod normalized_document;

pub use document::{Document, DocumentFormat};
pub use ingestion_request::{IngestionRequest, UnsupportedFileType, UploadedFile};
pub use normalized_document::{EmptyDocumentError, NormalizedDocument};
