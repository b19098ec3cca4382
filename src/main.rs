//! Aggregator service entry point.

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;

use people_relay::config::{load_aggregator_config, load_dotenv, DOTENV_FILE};
use people_relay::lifecycle::signals::spawn_signal_listener;
use people_relay::observability::{logging, metrics};
use people_relay::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "people-relay")]
#[command(about = "Fetches people from a backend and republishes them with a count", long_about = None)]
struct Cli {
    /// TOML config file (defaults to ./aggregator.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overrides PORT
    #[arg(short, long)]
    port: Option<String>,

    /// Backend URL, overrides BACKEND_URL
    #[arg(short, long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dotenv = load_dotenv(Path::new(DOTENV_FILE))?;

    let config = load_aggregator_config(cli.config.as_deref(), |key| match key {
        "PORT" if cli.port.is_some() => cli.port.clone(),
        "BACKEND_URL" if cli.backend_url.is_some() => cli.backend_url.clone(),
        _ => std::env::var(key).ok().or_else(|| dotenv.get(key).cloned()),
    })?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(port = %config.listener.port, "Starting demo application");
    tracing::info!(backend_url = %config.backend.url, "Backend URL");

    metrics::init_from_config(&config.observability);

    let bind_address = config.listener.bind_address();
    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        tracing::error!(address = %bind_address, error = %e, "Failed to bind listener");
        e
    })?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(&shutdown);

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
