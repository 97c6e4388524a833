use std::sync::Arc;

use medguard_llm::client::{CompletionClient, OllamaClient};
use medguard_ner::scanner::{EntityTagger, Scanner};
use medguard_ner::tagger::HttpEntityTagger;
use medguard_server::config::ServerConfig;
use medguard_server::pipeline::Deidentifier;
use medguard_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::load()?;
    let timeout = config.http_timeout();

    // Built once; shared read-only by every request for the process lifetime.
    let tagger: Arc<dyn EntityTagger> = Arc::new(HttpEntityTagger::new(&config.ner_url, timeout));
    let completion: Arc<dyn CompletionClient> = Arc::new(OllamaClient::new(
        &config.completion_url,
        &config.model,
        timeout,
    ));

    let state = AppState {
        pipeline: Arc::new(Deidentifier::new(completion, Scanner::new(tagger))),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr.as_str()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        completion_url = %config.completion_url,
        model = %config.model,
        ner_url = %config.ner_url,
        "medguard listening"
    );

    axum::serve(listener, medguard_server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
