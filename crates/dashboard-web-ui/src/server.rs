//! Web UI server implementation.

use crate::handlers::{self, AppState};
use crate::pages::PageRegistry;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the router serving `registry`.
pub fn router(registry: PageRegistry) -> Router {
    let state: AppState = Arc::new(registry);

    Router::new()
        .route("/", get(handlers::index))
        .route("/pages/:slug", get(handlers::get_page))
        .route("/api/pages", get(handlers::list_pages))
        .route("/api/pages/:slug/layout", get(handlers::get_layout))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub struct WebUiServer {
    addr: SocketAddr,
    registry: PageRegistry,
}

impl WebUiServer {
    pub fn new(addr: SocketAddr, registry: PageRegistry) -> Self {
        Self { addr, registry }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = router(self.registry);

        info!("Web UI listening on http://{}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
