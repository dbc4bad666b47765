pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as content;
use crate::state::AppState;
use crate::store::handlers as examples;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content API
        .route("/api/v1/content/generate", post(content::handle_generate))
        .route("/api/v1/content-types", get(content::handle_content_types))
        // Example store API
        .route("/api/v1/examples/stats", get(examples::handle_stats))
        .route(
            "/api/v1/examples/:content_type",
            get(examples::handle_list_examples),
        )
        .with_state(state)
}
