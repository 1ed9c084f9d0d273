mod api_error;
mod health;
mod summarize;
mod summarize_request;

pub use api_error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use summarize::{SummaryResponse, method_not_allowed_handler, summarize_handler};
pub use summarize_request::{RequestParseError, parse_ingestion_request};
