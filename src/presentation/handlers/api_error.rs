use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::SummarizeError;

use super::summarize_request::RequestParseError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every failure the summarize endpoint can report. Caller mistakes map to
/// 400, extraction and provider failures to 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestParseError),
    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Request(_) | Self::Summarize(SummarizeError::EmptyInput) => {
                StatusCode::BAD_REQUEST
            }
            Self::Summarize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to show the caller. Internal details stay in the logs,
    /// except provider messages which are forwarded verbatim.
    pub fn public_message(&self) -> String {
        match self {
            Self::Request(RequestParseError::NoInputProvided)
            | Self::Summarize(SummarizeError::EmptyInput) => "No input provided".to_string(),
            Self::Request(RequestParseError::UnsupportedContentType(_)) => {
                "Unsupported content type".to_string()
            }
            Self::Request(RequestParseError::UnsupportedFileType(extension)) => {
                format!("Unsupported file type: {extension}")
            }
            Self::Request(RequestParseError::InvalidRequestBody(_)) => {
                "Invalid request body".to_string()
            }
            Self::Summarize(SummarizeError::ExtractionFailed(_)) => {
                "Failed to extract text from document".to_string()
            }
            Self::Summarize(SummarizeError::FetchFailed(_)) => "Failed to fetch URL".to_string(),
            Self::Summarize(SummarizeError::AuthenticationFailed(_)) => {
                "Authentication with the summarization provider failed".to_string()
            }
            Self::Summarize(SummarizeError::ProviderError(message)) => message.clone(),
            Self::Summarize(SummarizeError::NetworkFailed(_)) => {
                "Summarization provider unreachable".to_string()
            }
            Self::Summarize(SummarizeError::UnexpectedResponseShape(_)) => {
                "Unexpected response from summarization provider".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Summarization failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Rejected summarize request");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
