use std::sync::Arc;

use anyhow::Context;
use tokio::signal;

use trip_planner_backend::{
    config::Config, routes, services::gemini::GeminiClient, state::AppState, telemetry,
};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before tracing so RUST_LOG can come from .env
    dotenvy::dotenv().ok();
    telemetry::init_tracing("info");

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;

    let gemini = GeminiClient::new(
        &config.gemini_api_base,
        &config.gemini_model,
        &config.gemini_api_key,
    );
    tracing::info!(model = gemini.model(), "Gemini client configured");

    let state = Arc::new(AppState::new(Arc::new(gemini)));
    let cors = routes::cors_layer(&config.allowed_origin)
        .with_context(|| format!("invalid CORS origin {:?}", config.allowed_origin))?;

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("Trip planner running at http://{}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
