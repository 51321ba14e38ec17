use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::assistant::LegalAssistant;

pub mod handlers;
pub mod models;

pub fn create_router(assistant: Arc<LegalAssistant>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ask", post(handlers::ask_handler))
        .with_state(assistant)
        .layer(cors)
}
