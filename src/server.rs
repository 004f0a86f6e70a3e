use crate::config::Config;
use anyhow::{Context, Result};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;

pub async fn bind(config: &Config) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))
}

/// Serves `router` on `listener` until `shutdown` resolves, then lets
/// in-flight requests finish.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn run(config: &Config, router: Router) -> Result<()> {
    let listener = bind(config).await?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    tracing::info!("Server listening on {}", local_addr);

    serve(listener, router, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => tracing::info!("Received Ctrl+C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down");
}
