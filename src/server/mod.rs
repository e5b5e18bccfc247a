// HTTP layer: routes, handlers and process lifecycle

pub mod error;
pub mod handlers;
pub mod schema;

use crate::core::assistant::MarketingAssistant;
use crate::utils::error::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<MarketingAssistant>,
}

impl AppState {
    pub fn new(assistant: MarketingAssistant) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }
}

pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", get(handlers::health))
        .route("/generate", post(handlers::generate_content))
        .route("/generate_ad", post(handlers::generate_ad))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 綁定位址並服務到收到關閉訊號為止
pub async fn serve(router: Router, bind_address: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
