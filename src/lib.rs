use axum::Router;
use std::{future::Future, net::TcpListener};

mod cfg;
pub use cfg::*;
mod telemetry;
pub use telemetry::*;
mod middleware;
pub use middleware::*;
mod errors;
pub use errors::ServerError;
mod routes;

/// Builds the application router with its observability layers.
pub fn app() -> Router {
    let trace_layer = telemetry::trace_layer();
    let (req_headers_layer, resp_headers_layer) = telemetry::sensitive_headers_layers();

    let request_id_layer = middleware::request_id_layer();
    let propagate_request_id_layer = middleware::propagate_request_id_layer();

    Router::new()
        .merge(routes::router())
        .layer(resp_headers_layer)
        .layer(propagate_request_id_layer)
        .layer(trace_layer)
        .layer(req_headers_layer)
        .layer(request_id_layer)
}

/// Serves [`app`] on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, shutdown: F) -> Result<(), hyper::Error>
where
    F: Future<Output = ()>,
{
    let addr = listener.local_addr().ok();
    let server = axum::Server::from_tcp(listener)?
        .serve(app().into_make_service())
        .with_graceful_shutdown(shutdown);

    tracing::info!("Listening on {:?}", addr);
    server.await?;
    tracing::info!("Gracefully shutdown complete");
    Ok(())
}
