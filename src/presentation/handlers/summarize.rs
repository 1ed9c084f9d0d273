use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, PageFetcher};
use crate::presentation::state::AppState;

use super::api_error::{ApiError, ErrorResponse};
use super::summarize_request::parse_ingestion_request;

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<F, P, L>(
    State(state): State<AppState<F, P, L>>,
    request: Request,
) -> Response
where
    F: FileLoader + 'static,
    P: PageFetcher + 'static,
    L: LlmClient + 'static,
{
    let ingestion_request = match parse_ingestion_request(request).await {
        Ok(r) => r,
        Err(e) => return ApiError::from(e).into_response(),
    };

    tracing::debug!(kind = ingestion_request.kind(), "Summarize request accepted");

    match state
        .summarization_service
        .summarize(ingestion_request)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(SummaryResponse { summary })).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Only POST allowed".to_string(),
        }),
    )
}
