//! Shared utilities for integration testing.

use std::sync::Arc;

use chain_tracker::config::TrackerConfig;
use chain_tracker::http::HttpServer;
use chain_tracker::lifecycle::Shutdown;
use chain_tracker::store::{MockStore, SeedData};
use tokio::net::TcpListener;

/// A tracker instance running on an ephemeral port.
///
/// The server stops when the handle is dropped.
pub struct TestServer {
    pub base_url: String,
    shutdown: Shutdown,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a tracker with the builtin seed dataset.
pub async fn start_tracker() -> TestServer {
    start_tracker_with(SeedData::builtin()).await
}

/// Start a tracker over a specific seed dataset.
pub async fn start_tracker_with(seed: SeedData) -> TestServer {
    let store = Arc::new(MockStore::new(seed));
    let server = HttpServer::new(TrackerConfig::default(), store);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        base_url: format!("http://{}", addr),
        shutdown,
    }
}
