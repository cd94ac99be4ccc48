//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::app::Dashboard;
use crate::cli::ServeArgs;
use crate::config::StatusWatchConfig;
use crate::logging::init_tracing;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<StatusWatchConfig, Box<dyn std::error::Error>> {
    let mut config = StatusWatchConfig::load_or_default(&args.config)?.with_env_overrides();

    // CLI overrides have the highest priority
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if args.no_refresh {
        config.refresh.enabled = false;
    }

    Ok(config)
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
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
    // 1. Load, merge and validate configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;

    tracing::info!("Starting statuswatch");
    tracing::debug!(?config, "Loaded configuration");

    // 3. Wire the dashboard
    let refresh_enabled = config.refresh.enabled;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let dashboard = Arc::new(Dashboard::from_config(config));
    tracing::info!(
        sources = dashboard.registry.source_count(),
        enabled = dashboard.registry.get_enabled_sources().len(),
        "Source catalog loaded"
    );

    // 4. Start the refresh timer (refreshes immediately)
    if refresh_enabled {
        dashboard.scheduler.start()?;
    } else {
        tracing::info!("Periodic refresh disabled");
    }

    // 5. Bind and serve
    let app = create_router(Arc::new(AppState::new(dashboard.clone())));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "statuswatch API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(dashboard.shutdown.clone()))
        .await?;

    // 6. Cleanup
    tracing::info!("Waiting for refresh timer to stop");
    dashboard.scheduler.stop().await;

    tracing::info!("statuswatch stopped");
    Ok(())
}
