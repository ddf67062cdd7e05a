//! Shared test utilities for lumen-server integration tests

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use lumen_core::{ContentStore, ProgressStore, TopicCatalog};
use lumen_server::{AppState, LumenServer, ServerConfig};
use tokio::net::TcpListener;

/// Creates a memory-only test server, returns its bound address
#[allow(dead_code)]
pub async fn create_test_server() -> SocketAddr {
    let state = Arc::new(AppState::in_memory("content"));
    spawn_server(state).await
}

/// Creates a test server whose store snapshots to `snapshot` and reads
/// reference content from `content_dir`
#[allow(dead_code)]
pub async fn create_test_server_with_dirs(snapshot: &Path, content_dir: &Path) -> SocketAddr {
    let store = Arc::new(ProgressStore::open(snapshot, TopicCatalog::default()).await);
    let content = Arc::new(ContentStore::new(content_dir));
    let state = Arc::new(AppState::new(store, content));
    spawn_server(state).await
}

/// Spawns server in background task, returns bound address
async fn spawn_server(state: Arc<AppState>) -> SocketAddr {
    let server = LumenServer::new(ServerConfig::default(), state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run_with_listener(listener).await;
    });

    // Brief delay to ensure server is accepting connections
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    addr
}
