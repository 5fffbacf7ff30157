//! pharmaops-ml-check - health probe for deployments
//!
//! GETs the given URL (default: the local ML service health endpoint),
//! prints the status and body, and exits non-zero on any failure so it can
//! back container health checks and deploy scripts.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Parser, Debug)]
#[command(name = "pharmaops-ml-check")]
#[command(about = "Probe a PharmaOps health endpoint")]
#[command(version)]
struct Args {
    /// Health endpoint URL
    #[arg(default_value = "http://localhost:8000/health")]
    url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match probe(&args.url).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the endpoint answered with a success status
async fn probe(url: &str) -> Result<bool> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;

    debug!(url = %url, "Probing health endpoint");
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if status.is_success() {
        println!("status {}", status.as_u16());
        println!("{}", body);
        Ok(true)
    } else {
        eprintln!("status {} {}", status.as_u16(), body);
        Ok(false)
    }
}
