//! Queue API server lifecycle.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::queue_api_router;
use crate::api::types::ApiContext;

/// Handle to a running queue API server.
pub struct QueueApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl QueueApiServer {
    /// Signal shutdown and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Queue API server shutdown signal sent");
        }
        if let Err(e) = self.task.await {
            tracing::error!("Queue API server task failed: {e}");
        }
    }
}

/// Start the queue API server on `addr` (port 0 picks an ephemeral port).
pub async fn start_queue_api_server(
    ctx: ApiContext,
    addr: SocketAddr,
) -> Result<QueueApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind queue API server: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    let app = queue_api_router(ctx);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Queue API server received shutdown signal");
        };

        tracing::info!(%addr, "Queue API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Queue API server error: {e}");
        }

        tracing::info!("Queue API server stopped");
    });

    Ok(QueueApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
