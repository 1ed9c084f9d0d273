use axum::body::Bytes;
use axum::extract::multipart::Field;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::domain::{IngestionRequest, UploadedFile};

const URL_FIELD: &str = "url";
const TEXT_FIELD: &str = "text";
const FILE_FIELD: &str = "file";

#[derive(Debug, thiserror::Error)]
pub enum RequestParseError {
    #[error("no input provided")]
    NoInputProvided,
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),
}

#[derive(Deserialize)]
struct JsonSummarizeRequest {
    #[serde(default)]
    text: Option<String>,
}

/// Fields collected from a multipart body. Only the first populated value
/// of each field is kept.
#[derive(Default)]
struct MultipartForm {
    url: Option<String>,
    text: Option<String>,
    file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Resolves by fixed priority: url, then text, then file. Lower-priority
    /// fields are dropped even when populated.
    fn into_ingestion_request(self) -> Result<IngestionRequest, RequestParseError> {
        if let Some(url) = self.url {
            return Ok(IngestionRequest::Url(url));
        }
        if let Some(text) = self.text {
            return Ok(IngestionRequest::Text(text));
        }
        if let Some(file) = self.file {
            return IngestionRequest::from_upload(file)
                .map_err(|e| RequestParseError::UnsupportedFileType(e.0));
        }
        Err(RequestParseError::NoInputProvided)
    }
}

/// Turns the raw request into a single [`IngestionRequest`], based on its
/// declared content type.
pub async fn parse_ingestion_request(
    request: Request,
) -> Result<IngestionRequest, RequestParseError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        parse_json(request).await
    } else if content_type.starts_with("multipart/form-data") {
        parse_multipart(request).await
    } else if content_type.is_empty() {
        Err(RequestParseError::UnsupportedContentType(
            "(none)".to_string(),
        ))
    } else {
        Err(RequestParseError::UnsupportedContentType(content_type))
    }
}

async fn parse_json(request: Request) -> Result<IngestionRequest, RequestParseError> {
    let body = Bytes::from_request(request, &())
        .await
        .map_err(|e| RequestParseError::InvalidRequestBody(e.to_string()))?;

    let payload: JsonSummarizeRequest = serde_json::from_slice(&body)
        .map_err(|e| RequestParseError::InvalidRequestBody(e.to_string()))?;

    match payload.text {
        Some(text) if !text.is_empty() => Ok(IngestionRequest::Text(text)),
        _ => Err(RequestParseError::NoInputProvided),
    }
}

async fn parse_multipart(request: Request) -> Result<IngestionRequest, RequestParseError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|e| RequestParseError::InvalidRequestBody(e.to_string()))?;

    let mut form = MultipartForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| RequestParseError::InvalidRequestBody(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            URL_FIELD => {
                let value = read_text(field).await?;
                let value = value.trim();
                if form.url.is_none() && !value.is_empty() {
                    form.url = Some(value.to_string());
                }
            }
            TEXT_FIELD => {
                let value = read_text(field).await?;
                if form.text.is_none() && !value.is_empty() {
                    form.text = Some(value);
                }
            }
            FILE_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| RequestParseError::InvalidRequestBody(e.to_string()))?;

                tracing::debug!(filename = %filename, bytes = data.len(), "File field received");

                if form.file.is_none() && !filename.is_empty() && !data.is_empty() {
                    form.file = Some(UploadedFile::new(filename, data.to_vec()));
                }
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    form.into_ingestion_request()
}

async fn read_text(field: Field<'_>) -> Result<String, RequestParseError> {
    field
        .text()
        .await
        .map_err(|e| RequestParseError::InvalidRequestBody(e.to_string()))
}
