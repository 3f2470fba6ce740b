mod http;

use carreg::{CarService, Config, Db, HttpRegistry, Validator};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

#[derive(Parser, Debug)]
#[command(name = "carreg-server")]
#[command(about = "Car registration record service")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file. Without one, `CARREG_*` environment
    /// variables are read.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop and recreate the car table before serving.
    #[arg(long)]
    reset_db: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load config from `{}`", path.display()),
        None => "failed to load config from environment".to_string(),
    })?;

    init_tracing(&config.log_level.0);
    tracing::info!("logger initialized");
    tracing::debug!(?config, "loaded config");

    let service = build_service(&config, cli.reset_db).await?;

    let addr: SocketAddr = tokio::net::lookup_host(config.http_addr())
        .await?
        .next()
        .with_context(|| format!("`{}` resolved to no address", config.http_addr()))?;

    http::serve(addr, service, shutdown_signal()).await
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn build_service(config: &Config, reset_db: bool) -> Result<CarService> {
    let mut builder = Db::builder();
    builder.table(&config.database.car_table);
    if let Some(max_size) = config.database.pool_max_size {
        builder.max_pool_size(max_size);
    }

    let db = builder
        .connect(&config.database.url)
        .await
        .context("failed to connect to the database")?;

    if reset_db {
        tracing::warn!(table = %config.database.car_table, "resetting database");
        db.reset_db().await?;
    } else {
        db.push_schema().await?;
    }

    let registry = HttpRegistry::new(&config.registry.url)
        .context("failed to initialise registry client")?;
    let validator = Validator::new(&config.validator)?;

    Ok(CarService::new(db, Arc::new(registry), validator).filter_policy(config.filter_policy))
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
