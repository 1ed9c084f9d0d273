use axum::http::StatusCode;
use axum::response::IntoResponse;

use fineprint::application::ports::{FileLoaderError, PageFetcherError};
use fineprint::application::services::SummarizeError;
use fineprint::presentation::handlers::{ApiError, RequestParseError};

#[test]
fn given_caller_mistakes_when_mapping_then_status_is_bad_request() {
    let errors = [
        ApiError::from(RequestParseError::NoInputProvided),
        ApiError::from(RequestParseError::UnsupportedContentType("text/plain".to_string())),
        ApiError::from(RequestParseError::UnsupportedFileType(".txt".to_string())),
        ApiError::from(RequestParseError::InvalidRequestBody("eof".to_string())),
        ApiError::from(SummarizeError::EmptyInput),
    ];

    for error in errors {
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{error}");
    }
}

#[test]
fn given_processing_failures_when_mapping_then_status_is_internal_error() {
    let errors = [
        ApiError::from(SummarizeError::ExtractionFailed(
            FileLoaderError::ExtractionFailed("bad xref".to_string()),
        )),
        ApiError::from(SummarizeError::FetchFailed(PageFetcherError::HttpStatus(503))),
        ApiError::from(SummarizeError::AuthenticationFailed("401".to_string())),
        ApiError::from(SummarizeError::ProviderError("rate limited".to_string())),
        ApiError::from(SummarizeError::NetworkFailed("refused".to_string())),
        ApiError::from(SummarizeError::UnexpectedResponseShape("{}".to_string())),
    ];

    for error in errors {
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR, "{error}");
    }
}

#[test]
fn given_errors_when_building_public_message_then_matches_contract() {
    let cases = [
        (
            ApiError::from(RequestParseError::NoInputProvided),
            "No input provided",
        ),
        (ApiError::from(SummarizeError::EmptyInput), "No input provided"),
        (
            ApiError::from(RequestParseError::UnsupportedContentType("text/plain".to_string())),
            "Unsupported content type",
        ),
        (
            ApiError::from(RequestParseError::UnsupportedFileType(".txt".to_string())),
            "Unsupported file type: .txt",
        ),
        (
            ApiError::from(RequestParseError::InvalidRequestBody("eof".to_string())),
            "Invalid request body",
        ),
        (
            ApiError::from(SummarizeError::ExtractionFailed(FileLoaderError::NoTextFound(
                "a.pdf".to_string(),
            ))),
            "Failed to extract text from document",
        ),
        (
            ApiError::from(SummarizeError::FetchFailed(PageFetcherError::Network(
                "dns".to_string(),
            ))),
            "Failed to fetch URL",
        ),
        (
            ApiError::from(SummarizeError::ProviderError("rate limited".to_string())),
            "rate limited",
        ),
        (
            ApiError::from(SummarizeError::NetworkFailed("refused".to_string())),
            "Summarization provider unreachable",
        ),
        (
            ApiError::from(SummarizeError::UnexpectedResponseShape("{}".to_string())),
            "Unexpected response from summarization provider",
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.public_message(), expected);
    }
}

#[test]
fn given_authentication_failure_when_building_public_message_then_details_are_hidden() {
    let error = ApiError::from(SummarizeError::AuthenticationFailed(
        "Incorrect API key provided: sk-live-123".to_string(),
    ));

    let message = error.public_message();

    assert!(!message.contains("sk-live-123"));
    assert_eq!(message, "Authentication with the summarization provider failed");
}

#[tokio::test]
async fn given_api_error_when_converting_to_response_then_body_has_error_field() {
    let response = ApiError::from(RequestParseError::NoInputProvided).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "No input provided" }));
}
