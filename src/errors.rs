use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum ServerError {
    NotFound(Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(err) => {
                tracing::warn!("{:?}", err);
                HTTPError::new(err)
                    .with_status(StatusCode::NOT_FOUND)
                    .into_response()
            }
        }
    }
}

#[derive(Debug)]
struct HTTPError {
    error: Error,
    status_code: StatusCode,
}

impl HTTPError {
    fn new(error: Error) -> Self {
        Self {
            error,
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }
}

impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(json!({ "error": self.error.to_string() })),
        )
            .into_response()
    }
}
