//! Status and control API for the AI meeting scheduler agent.
//!
//! Run with: cargo run -p meeting-agent-server
//!
//! Then query http://localhost:5000/docs for the endpoint catalog.

mod config;

use std::sync::Arc;

use meeting_agent_core::SERVICE_NAME;
use meeting_agent_session::{MemoryMessageStore, StatusService};
use meeting_agent_transport::create_router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::default();
    let addr = config.socket_addr()?;

    let service = Arc::new(StatusService::new(MemoryMessageStore::new()));
    let app = create_router(service);

    tracing::info!("Starting {SERVICE_NAME} backend API on http://{addr}");
    tracing::info!("The agent itself runs as a separate process; this API only records its status");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully..."),
        () = terminate => tracing::info!("Received SIGTERM, shutting down gracefully..."),
    }
}
