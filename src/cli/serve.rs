//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::cli::context::{build_router, load_config, load_dataset};
use crate::cli::ServeArgs;
use crate::config::VitalisConfig;
use crate::logging::init_tracing;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::timeout::TimeoutLayer;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<VitalisConfig, Box<dyn std::error::Error>> {
    let mut config = load_config(&args.source)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for CTRL+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
        _ = cancel_token.cancelled() => {}
    }

    cancel_token.cancel();
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(&args)?;
    init_tracing(&config.logging)?;

    tracing::info!("Starting Vitalis server");
    tracing::debug!(?config, "Loaded configuration");

    let dataset = load_dataset(&config)?;
    let router = Arc::new(build_router(&config, dataset)?);
    let state = Arc::new(AppState::new(router));

    let app = create_router(state).layer(TimeoutLayer::new(config.server.request_timeout()));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Vitalis API server listening");

    let cancel_token = CancellationToken::new();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    tracing::info!("Vitalis server stopped");
    Ok(())
}
