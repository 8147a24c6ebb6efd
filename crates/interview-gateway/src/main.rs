//! Interview Gateway
//!
//! Entry point. Loads configuration once, validates it, and refuses to serve
//! traffic in production when the configuration is invalid.

use interview_gateway::config::Config;
use interview_gateway::routes::{self, AppState};
use interview_gateway::services::DailyClient;
use interview_gateway::validation;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "interview_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Gateway");

    // Load configuration; fatal only per the accessor contract (production
    // with missing credentials, or an unparseable integer).
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        environment = config.app.mode.as_str(),
        bind_address = %config.app.bind_address,
        daily_domain = %config.daily.domain,
        "Configuration loaded"
    );

    validation::log_validation_status(&config);

    // The sole gate before serving traffic: development runs with errors as
    // an advisory, production refuses to start.
    if !validation::can_run(&config) {
        error!("Configuration is invalid; refusing to serve traffic in production");
        return Err("invalid configuration".into());
    }

    let daily = DailyClient::new(config.daily.api_url.clone())?;

    let bind_address = config.app.bind_address.clone();
    let state = Arc::new(AppState { config, daily });
    let app = routes::build_routes(state);

    let addr: SocketAddr = bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    info!("Interview Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Interview Gateway shutdown complete");

    Ok(())
}

/// Listens for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT, starting graceful shutdown..."),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, starting graceful shutdown...");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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
}
