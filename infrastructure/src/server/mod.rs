//! HTTP transport for tool calls.
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `POST /tools/call` | Dispatch `{name, arguments}` with credential headers |
//! | `GET /tools` | List tool definitions |
//! | `GET /health` | Liveness probe |
//!
//! Every protocol outcome (success, pending, cancelled, denied, error) is
//! answered with HTTP 200 and the serialized result. Only an unreadable
//! request envelope gets a 4xx.

mod routes;

pub use routes::router;

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use toolgate_application::ToolDispatcher;
use tracing::info;

/// Errors from running the HTTP transport
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the listener for [`serve`]
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve tool calls until `shutdown` is cancelled.
///
/// In-flight calls are allowed to finish before this returns.
pub async fn serve(
    listener: TcpListener,
    dispatcher: Arc<ToolDispatcher>,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    info!(%addr, tools = dispatcher.tool_spec().len(), "Tool server listening");

    axum::serve(listener, router(dispatcher))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Tool server stopped");
    Ok(())
}
