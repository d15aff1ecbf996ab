//! Axum router configuration with middleware.
//!
//! API routes live under `/api`. When the web directory exists its files
//! are served for every other path.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::state::AppState;
use crate::llm::{DraftGenerator, Rewriter};

/// Build the complete router with all routes and middleware.
pub fn build_router<D, R>(state: AppState<D, R>, web_dir: Option<&Path>) -> Router
where
    D: DraftGenerator + 'static,
    R: Rewriter + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/generate", post(handlers::generate::<D, R>))
        .route("/save", post(handlers::save::<D, R>))
        .route("/health", get(handlers::health));

    let mut router = Router::new().nest("/api", api_routes);

    if let Some(dir) = web_dir.filter(|d| d.is_dir()) {
        router = router.fallback_service(ServeDir::new(dir));
        tracing::info!(path = ?dir, "Static file serving enabled");
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
