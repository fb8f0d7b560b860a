use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use redactia_analysis::analyzer::Analyzer;
use redactia_analysis::prompt::CLEAR_LANGUAGE_PROMPT;
use redactia_api::config::Config;
use redactia_api::state::AppState;
use redactia_openai::client::OpenAiClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = redactia_store::client::connect(&config.mongo_url, &config.db_name).await?;

    let gateway = config.openai_api_key.as_deref().map(OpenAiClient::new);
    if gateway.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; analysis requests will fail until configured");
    }

    let state = AppState {
        db,
        analyzer: Arc::new(Analyzer::new(gateway, CLEAR_LANGUAGE_PROMPT)),
    };

    let cors = redactia_api::cors_layer(&config.cors_origins);
    let app = redactia_api::app(state).layer(cors);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve on SIGINT or SIGTERM, so startup-acquired clients get dropped
/// on the way out of `main`.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
