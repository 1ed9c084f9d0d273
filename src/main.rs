use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use fineprint::application::services::{IngestionService, SummarizationService};
use fineprint::infrastructure::llm::OpenAiClient;
use fineprint::infrastructure::observability::{TracingConfig, init_tracing};
use fineprint::infrastructure::text_processing::CompositeFileLoader;
use fineprint::infrastructure::web::HtmlPageFetcher;
use fineprint::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(&settings, environment),
        settings.server.port,
    );

    if settings.llm.api_key.is_empty() {
        tracing::warn!("No LLM API key configured; the provider will reject summaries");
    }

    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());
    let page_fetcher = Arc::new(HtmlPageFetcher::new(
        Duration::from_secs(settings.fetch.timeout_secs),
        &settings.fetch.user_agent,
    )?);
    let llm_client = Arc::new(OpenAiClient::new(&settings.llm)?);

    tracing::info!(
        model = %settings.llm.chat_model,
        base_url = %settings.llm.base_url,
        "Summarization provider configured"
    );

    let ingestion_service = IngestionService::new(file_loader, page_fetcher);
    let summarization_service = Arc::new(SummarizationService::new(
        ingestion_service,
        llm_client,
    ));

    let state = AppState {
        summarization_service,
        max_body_bytes: settings.upload.max_body_bytes,
    };

    let router = create_router(state);

    let listener =
        TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
