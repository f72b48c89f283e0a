use axum::{
    routing::{get, post},
    Router,
};

mod embeddings;
mod health_check;
mod not_found;

pub fn router() -> Router {
    let router = Router::new()
        .route("/health_check", get(health_check::health_check_handler))
        .route("/api/embeddings", post(embeddings::embeddings_handler))
        .fallback(not_found::not_found_handler);
    tracing::info!("Embeddings handler loaded");
    router
}
