use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use take_home_pay::api::{AppState, create_router};
use take_home_pay::config::ConfigLoader;

/// Take-home pay estimator for Australian shift workers.
///
/// Serves the calculation, session and content endpoints over HTTP.
#[derive(Debug, Parser)]
struct Cli {
    /// Directory holding `tax.yaml` and `pay.yaml`.
    /// Built-in 2023-24 figures are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set and falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(dir) => ConfigLoader::load(dir)?,
        None => ConfigLoader::builtin(),
    };
    info!(financial_year = loader.financial_year(), "Loaded pay configuration");

    let router = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
