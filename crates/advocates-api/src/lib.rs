//! Search API for the advocate directory.
//!
//! One read-only endpoint, `GET /api/advocates?search=<term>`, answering with
//! `{"data": [...]}`. Storage failures on either the filtered or the
//! unfiltered path come back as a 500 carrying `{"data": [], "error": "Search failed"}`.

mod config;
mod handler;
mod wire;

pub use config::{ServerConfig, DEFAULT_BIND};
pub use handler::{search_advocates, AppState, SearchOutcome};
pub use wire::{AdvocatesResponse, ADVOCATES_PATH, SEARCH_FAILED};

use anyhow::{Context, Result};
use advocates_store::AdvocateStore;
use axum::{routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ADVOCATES_PATH, get(handler::advocates_handler))
        .with_state(state)
}

/// Open the store named by `config` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let store = AdvocateStore::open(&config.db_path).with_context(|| {
        format!(
            "Failed to open advocate store at {}",
            config.db_path.display()
        )
    })?;
    let state = AppState::new(Arc::new(store));

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    run(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    log::info!("Serving advocates on http://{addr}{ADVOCATES_PATH}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server terminated unexpectedly")?;

    log::info!("Server on {addr} shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
