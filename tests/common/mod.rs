//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::Path;
use tokio::net::TcpListener;

use staticd::config::ServerConfig;
use staticd::http::HttpServer;

/// Start the server over `root` on an ephemeral port and return its address.
///
/// The listener is bound before the server task is spawned, so requests can
/// be issued immediately.
pub async fn spawn_server(root: &Path) -> SocketAddr {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.serve.root = Some(root.to_path_buf());

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
