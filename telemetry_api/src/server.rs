use crate::routes::build_router;
use crate::state::AppState;
use anyhow::Result;
use telemetry_source::{load_dataset_or_empty, ServiceConfig};
use tracing::info;

/// Loads the dataset named by `config`, then serves until Ctrl+C or SIGTERM.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    config.validate()?;
    let addr = config.listen_addr()?;

    let dataset = load_dataset_or_empty(&config.dataset_path).await;
    let state = AppState::new(dataset, config.message.clone());
    let app = build_router(state, &config)?;

    info!("Starting telemetry metrics service on {}", addr);
    info!("Endpoints:");
    info!("  GET  /             - Service info and available regions");
    info!("  GET  /health       - Health check");
    info!("  POST /api/metrics  - Per-region latency metrics");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Telemetry metrics service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
    info!("Signal received, starting graceful shutdown");
}
