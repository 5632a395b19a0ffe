//! Vigil API server - transaction event ingestion and alerting

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use vigil_api::{create_router, AppState};
use vigil_engine::{AlertEngine, RuleConfig, SystemClock};
use vigil_store::MemoryStore;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Vigil - per-user transaction monitoring and alerting", long_about = None)]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    bind: String,

    /// Optional rule config file (JSON); defaults apply otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RuleConfig::from_file(path)?,
        None => RuleConfig::default(),
    };

    let engine = AlertEngine::new(config, Arc::new(MemoryStore::new()), Arc::new(SystemClock));
    let app = create_router(AppState::new(engine));

    let addr: SocketAddr = cli.bind.parse()?;
    tracing::info!("vigil listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
