use axum::Json;
use serde::Serialize;

pub const GREETING: &str = "Hello from Python!";

#[derive(Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Answers every POST with the same payload. The request body and headers
/// are never read.
pub async fn embeddings_handler() -> Json<Greeting> {
    tracing::info!("Received POST request");
    Json(Greeting { message: GREETING })
}
