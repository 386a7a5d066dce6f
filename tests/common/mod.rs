//! Shared utilities for integration tests.

use std::net::SocketAddr;

use json_respond::{demo, RespondConfig, Responder};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A demo server bound to an ephemeral port; stops when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the demo server with the given response settings.
pub async fn start_demo_server(config: RespondConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown = async {
            let _ = rx.await;
        };
        let _ = demo::serve(listener, Responder::new(config), shutdown).await;
    });

    TestServer {
        addr,
        _shutdown: tx,
    }
}

/// Client that never reuses connections across tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
