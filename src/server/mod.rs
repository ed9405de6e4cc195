//! HTTP surface for the action layer

pub mod handlers;
pub mod router;

pub use handlers::{AppState, OutcomeResponse};
pub use router::build_router;

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with an env-filtered subscriber.
///
/// Call once at startup; respects `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

/// Bind `addr` and serve the router until the process is stopped.
pub async fn serve(addr: &str, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
