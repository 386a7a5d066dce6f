//! Demo HTTP server exercising every responder path.
//!
//! | Route     | Path through the responder                      |
//! |-----------|-------------------------------------------------|
//! | `/hello`  | `ok` with a JSON object                         |
//! | `/empty`  | `not_found` with a nil payload                  |
//! | `/teapot` | `respond_error` with a typed error              |
//! | `/denied` | `respond_error` with a typed error, no message  |
//! | `/broken` | `respond_error_fallback` with a plain error     |
//! | `/limited`| `respond_error_fallback` with a registered type |

pub mod handlers;

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::Responder;
use self::handlers::*;

/// Build the demo routes; registers [`RateLimited`] as a typed error.
pub fn setup_demo_router(responder: Responder) -> Router {
    let responder = responder.with_classifiable::<RateLimited>();
    Router::new()
        .route("/hello", get(hello))
        .route("/empty", get(empty))
        .route("/teapot", get(teapot))
        .route("/denied", get(denied))
        .route("/broken", get(broken))
        .route("/limited", get(limited))
        .layer(TraceLayer::new_for_http())
        .with_state(responder)
}

/// Serve the demo router until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, responder: Responder, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Demo server starting");

    axum::serve(listener, setup_demo_router(responder))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Demo server stopped");
    Ok(())
}
