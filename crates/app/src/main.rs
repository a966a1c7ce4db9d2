//! Courier API Client - Main Entry Point
//!
//! Loads settings and stored state from the data directory, runs one command
//! and prints its result as JSON on stdout. Logs go to stderr.

mod cli;
mod commands;

use clap::Parser;
use courier_application::{ExecuteRequest, Workbench};
use courier_infrastructure::{
    FileKeyValueStore, ReqwestHttpClient, SettingsRepository, SystemClock, resolve_data_dir,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

/// Environment variable that overrides the request timeout, in milliseconds.
const TIMEOUT_ENV: &str = "COURIER_TIMEOUT_MS";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let mut settings = SettingsRepository::new(&data_dir).load().await?;
    if let Some(timeout_ms) = timeout_override()? {
        settings.timeout_ms = timeout_ms;
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(
        data_dir = %data_dir.display(),
        timeout_ms = settings.timeout_ms,
        "Starting Courier v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = ReqwestHttpClient::new(&settings)?;
    let executor = ExecuteRequest::new(client, settings.timeout());
    let store = FileKeyValueStore::new(&data_dir);
    let mut bench = Workbench::load(executor, store, SystemClock::new()).await;

    let output = commands::run(cli.command, &mut bench).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn timeout_override() -> Result<Option<u64>, std::num::ParseIntError> {
    std::env::var(TIMEOUT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().parse())
        .transpose()
}
