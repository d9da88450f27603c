use clap::Parser;
use clothing_search::app::{build_router, AppState};
use clothing_search::auth::ApiKey;
use clothing_search::catalog::types::Catalog;
use clothing_search::config::ServiceConfig;
use clothing_search::logging::init_logger;
use clothing_search::training::trainer::simulated_trainer;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clothing-search", about = "Keyword-driven clothing search service")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides config and PORT)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = ServiceConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    config.validate()?;

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load(path)?,
        None => {
            let catalog = Catalog::bundled()?;
            tracing::info!("Using bundled catalog ({} items)", catalog.len());
            catalog
        }
    };

    let trainer = simulated_trainer(
        config.training_duration(),
        config.training.model_version.clone(),
    );
    let state = AppState::new(ApiKey::new(config.api_key()?), catalog, trainer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    tracing::info!("Server running on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
