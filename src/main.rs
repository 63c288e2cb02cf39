use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use docguard::application::ports::{ContentClassifier, KeywordRepository, LlmClient};
use docguard::application::services::GuardService;
use docguard::infrastructure::classifiers::{KeywordClassifier, LlamaGuardClassifier};
use docguard::infrastructure::llm::OpenAiClient;
use docguard::infrastructure::observability::{TracingConfig, init_tracing};
use docguard::infrastructure::persistence::{PgKeywordRepository, create_pool};
use docguard::infrastructure::storage::WorkingArea;
use docguard::infrastructure::text_processing::{ExtractorFactory, OverlapChunker};
use docguard::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    ));

    let file_loader = Arc::new(
        ExtractorFactory::create(&settings.extraction)
            .context("Failed to register extraction strategies")?,
    );
    let text_splitter = Arc::new(
        OverlapChunker::new(settings.chunking.max_chunk_size, settings.chunking.overlap)
            .context("Invalid chunking configuration")?,
    );

    let llm_client: Arc<dyn LlmClient> = Arc::new(
        OpenAiClient::new(
            &settings.llm.base_url,
            settings.llm.api_key.clone(),
            settings.llm.model.clone(),
            settings.llm.max_tokens,
            Duration::from_secs(settings.llm.timeout_secs),
        )?
        .with_max_retries(settings.llm.max_retries),
    );
    let model_classifier: Arc<dyn ContentClassifier> =
        Arc::new(LlamaGuardClassifier::new(llm_client));

    let pool = create_pool(
        &settings.keywords.database_url,
        settings.keywords.max_connections,
        settings.keywords.connect_retries,
    )
    .await?;
    let keyword_repository: Arc<dyn KeywordRepository> = Arc::new(PgKeywordRepository::new(pool));
    let lexical_classifier: Arc<dyn ContentClassifier> =
        Arc::new(KeywordClassifier::load(keyword_repository).await?);

    let guard_service = Arc::new(GuardService::new(
        file_loader,
        text_splitter,
        model_classifier,
        lexical_classifier,
        settings.classification.max_concurrent_chunks,
    ));

    let working_area = WorkingArea::new(settings.source.working_area.clone())
        .context("Failed to prepare working area")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let state = AppState {
        guard_service,
        working_area,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
