//! HTTP server for flood risk lookups.
//!
//! Serves elevation, geocoding and sea level rise risk endpoints backed by
//! public upstream services.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tideline::config::Config;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "tideline-server")]
#[command(about = "Flood risk assessment API server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8000")]
    listen: String,

    /// Optional TOML config file (CORS origins, upstream URLs, timeouts)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Tideline API Server");

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };

    info!(
        "Elevation sources: {} then {}",
        config.upstream.open_elevation_url, config.upstream.open_meteo_url
    );
    info!("Geocoding via {}", config.upstream.nominatim_url);
    info!("CORS origins: {:?}", config.cors.allowed_origins);

    let app = tideline::api::app(&config)?;

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
