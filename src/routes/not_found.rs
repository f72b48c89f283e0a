use anyhow::anyhow;
use axum::http::Uri;

use crate::errors::ServerError;

pub async fn not_found_handler(uri: Uri) -> ServerError {
    ServerError::NotFound(anyhow!("Not found: {}", uri.path()))
}
