//! HTTP server exposing user profiles.
//!
//! Serves `GET /profiles/{id}` backed by the cached aggregation provider.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use profile_service::infrastructure::config::ConfigLoader;
use profile_service::infrastructure::http::router;
use profile_service::infrastructure::setup::build_profile_service;

#[derive(Parser, Debug)]
#[command(name = "profile-server")]
#[command(about = "HTTP server for aggregated user profiles")]
struct Args {
    /// Path to a configuration file (defaults to profile-service.yaml + env)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting profile server");
    info!("Upstream base URL: {}", config.upstream.base_url);
    info!(
        "Cache: enabled={} max_entries={} ttl={}s",
        config.cache.enabled, config.cache.max_entries, config.cache.ttl_seconds
    );

    let service = Arc::new(
        build_profile_service(&config).context("Failed to assemble profile service")?,
    );

    let app = router(service);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Profile server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
