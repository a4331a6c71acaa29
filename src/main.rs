// src/main.rs

//! Page mirror service entry point.
//!
//! Loads configuration, wires the rendering engine and the content store
//! together and serves the HTTP surface until the process is stopped.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use pagemirror::config::{Config, RenderEngine};
use pagemirror::error::{AppError, Result};
use pagemirror::logging;
use pagemirror::render::{ChromiumRenderer, HttpRenderer, PageRenderer};
use pagemirror::services::MirrorService;
use pagemirror::state::AppState;
use pagemirror::storage::LocalStore;
use pagemirror::web::build_router;

#[derive(Parser, Debug)]
#[command(name = "pagemirror", version, about = "Web page mirroring service")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the storage directory
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env_overrides();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = cli.storage_dir {
        config.storage.root = dir;
    }
    config.validate()?;

    info!("page mirror service starting");

    let store = Arc::new(LocalStore::new(&config.storage.root));
    store.ensure_root().await?;

    let renderer: Arc<dyn PageRenderer> = match config.renderer.engine {
        RenderEngine::Chromium => Arc::new(ChromiumRenderer::new(config.renderer.clone())),
        RenderEngine::Http => Arc::new(HttpRenderer::new(&config.renderer)?),
    };

    let mirror = MirrorService::new(
        renderer,
        store.clone(),
        config.renderer.navigation_timeout(),
    );

    let config = Arc::new(config);
    let state = AppState {
        mirror: Arc::new(mirror),
        store,
        config: Arc::clone(&config),
    };

    let ip: IpAddr = config.server.bind.parse().map_err(|e| {
        AppError::config(format!("invalid bind address {:?}: {e}", config.server.bind))
    })?;
    let addr = SocketAddr::new(ip, config.server.port);

    info!("listening on http://{addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, build_router(state)).await?;

    Ok(())
}
