use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient, PageFetcher};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, method_not_allowed_handler, summarize_handler,
};
use crate::presentation::state::AppState;

pub const SUMMARIZE_PATH: &str = "/api/summarize";

pub fn create_router<F, P, L>(state: AppState<F, P, L>) -> Router
where
    F: FileLoader + 'static,
    P: PageFetcher + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            SUMMARIZE_PATH,
            post(summarize_handler::<F, P, L>).fallback(method_not_allowed_handler),
        )
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
