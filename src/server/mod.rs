//! Browser UI surface: a small axum server around the detection pipeline

pub mod handlers;
pub mod image_utils;
pub mod request;
pub mod response;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use ocrs::OcrEngine;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::image_utils::MAX_UPLOAD_SIZE;

/// Shared server state.
///
/// The OCR engine is loaded once at startup and reused for every scan.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<OcrEngine>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/scan", post(handlers::scan))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(addr: SocketAddr, engine: OcrEngine) -> anyhow::Result<()> {
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("scan UI listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
