// src/web/mod.rs
// Web server layer: the form page plus a small JSON API

pub mod error;
pub mod handlers;
pub mod page;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/experts", get(handlers::list_experts))
        .route("/ask", post(handlers::ask));

    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/health", get(handlers::health))
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
