//! Lumen serve command for running the backend server
//!
//! The serve command runs the lumen server which provides:
//! - JSON API for registration, progress, and the leaderboard
//! - Reference content lookups
//! - The embedded learner-facing pages

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use lumen_core::{ContentStore, ProgressStore, TopicCatalog};
use lumen_server::{AppState, LumenServer, ServerConfig};

use crate::config::ConfigLoader;

/// Snapshot file name inside the data directory
const SNAPSHOT_FILE: &str = "progress.json";

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Path to a config file (defaults to the user config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the progress snapshot (defaults to the user data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the reference content files
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Keep all state in memory and never write a snapshot
    #[arg(long)]
    pub ephemeral: bool,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_path(path)?,
        None => ConfigLoader::load()?,
    };

    // Flags beat config, config beats defaults.
    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);

    let topics = match config.topics {
        Some(totals) => TopicCatalog::new(totals),
        None => TopicCatalog::default(),
    };

    let store = if args.ephemeral {
        info!("Running without a snapshot; progress is lost on exit");
        ProgressStore::in_memory(topics)
    } else {
        let data_dir = args
            .data_dir
            .or(config.storage.data_dir)
            .unwrap_or_else(lumen_paths::data_dir);
        ProgressStore::open(data_dir.join(SNAPSHOT_FILE), topics).await
    };

    let content_dir = args
        .content_dir
        .or(config.content.dir)
        .unwrap_or_else(lumen_paths::content_dir);
    let content = ContentStore::new(content_dir);

    let state = Arc::new(AppState::new(Arc::new(store), Arc::new(content)));

    info!("Starting lumen server on {}:{}", host, port);

    let server = LumenServer::new(ServerConfig::new(host, port), state);
    server.run().await.map_err(Into::into)
}
