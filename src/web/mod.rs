//! HTTP surface of the service, built on axum.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;

use crate::badge::BadgeRenderer;
use crate::config::Config;
use crate::error::AppError;
use crate::rank::RankResolver;

mod handlers;

/// Shared data accessible in all handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<RankResolver>,
    pub renderer: Arc<BadgeRenderer>,
}

impl AppState {
    pub fn new(resolver: RankResolver, renderer: BadgeRenderer) -> Self {
        Self {
            resolver: Arc::new(resolver),
            renderer: Arc::new(renderer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/badge/{region}/{name}/{tag}", get(handlers::badge))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn serve(config: &Config, state: AppState) -> Result<(), AppError> {
    let listener = TcpListener::bind(config.bind_addr()).await?;

    info!(addr = %listener.local_addr()?, "🌐 Badge server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🌐 Badge server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("🌐 Shutdown signal received");
    }
}
