//! pharmaops-ml - ML Service for PharmaOps
//!
//! **Module Identity:**
//! - Name: pharmaops-ml
//! - Default bind: 127.0.0.1:8000
//!
//! Serves `/classify`, `/extract-fields` and `/predict-risk` to the
//! PharmaOps backend, plus `/health` and `/build_info`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pharmaops_common::config::{ConfigOverrides, ConfigSource, ServiceConfig, TomlConfig};
use pharmaops_ml::{build_router, AppState, MODULE_NAME};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for pharmaops-ml
#[derive(Parser, Debug)]
#[command(name = "pharmaops-ml")]
#[command(about = "Heuristic ML service for PharmaOps")]
#[command(version)]
struct Args {
    /// Interface to bind
    #[arg(long, env = "PHARMAOPS_ML_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PHARMAOPS_ML_PORT")]
    port: Option<u16>,

    /// TOML bootstrap config (default: <config_dir>/pharmaops/ml-service.toml)
    #[arg(short, long, env = "PHARMAOPS_ML_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "PHARMAOPS_ML_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is resolved before tracing so the log level can come from TOML
    let (toml, source) =
        TomlConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let config =
        ServiceConfig::resolve(args.overrides(), toml).context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, for instant startup feedback
    info!(
        "Starting PharmaOps ML Service ({}) v{} [{}] built {} ({})",
        MODULE_NAME,
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &source {
        ConfigSource::File(_) => info!("Configuration: {}", source),
        ConfigSource::Defaults { .. } => warn!("Configuration: {}", source),
    }

    let app = build_router(AppState::new());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let local = listener.local_addr().context("Failed to read bound address")?;
    info!("{} listening on http://{}", MODULE_NAME, local);
    info!("Health check: http://{}/health", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
