//! # Basket API
//!
//! Server entry point: configuration, store, router, graceful shutdown.

use tokio::net::TcpListener;
use tracing::{error, info};

use basket_api::{init_tracing, open_store, router, ApiConfig, BasketService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Basket API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        addr = %config.socket_addr(),
        store = ?config.store,
        "Configuration loaded"
    );

    // Open the basket store
    let store = open_store(&config).await?;
    let service = BasketService::new(store);

    let app = router(service);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening for HTTP requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
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
                error!(?e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
