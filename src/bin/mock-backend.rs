//! Mock data service entry point.

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;

use people_relay::config::{load_dotenv, load_mock_config, DOTENV_FILE};
use people_relay::lifecycle::signals::spawn_signal_listener;
use people_relay::observability::{logging, metrics};
use people_relay::{MockServer, Shutdown};

#[derive(Parser)]
#[command(name = "mock-backend")]
#[command(about = "Serves a fixed list of people after an artificial delay", long_about = None)]
struct Cli {
    /// TOML config file (defaults to ./mock-backend.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port, overrides MOCK_PORT
    #[arg(short, long)]
    port: Option<String>,

    /// Artificial latency in milliseconds, overrides MOCK_DELAY_MS
    #[arg(short, long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dotenv = load_dotenv(Path::new(DOTENV_FILE))?;

    let config = load_mock_config(cli.config.as_deref(), |key| match key {
        "MOCK_PORT" if cli.port.is_some() => cli.port.clone(),
        "MOCK_DELAY_MS" if cli.delay_ms.is_some() => cli.delay_ms.map(|d| d.to_string()),
        _ => std::env::var(key).ok().or_else(|| dotenv.get(key).cloned()),
    })?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(port = %config.listener.port, "Starting mock backend service");

    metrics::init_from_config(&config.observability);

    let bind_address = config.listener.bind_address();
    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        tracing::error!(address = %bind_address, error = %e, "Failed to bind listener");
        e
    })?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(&shutdown);

    MockServer::new(config).run(listener, shutdown.subscribe()).await?;
    Ok(())
}
