//! HTTP API.
//!
//! JSON endpoints for the booking clerk, the servers, and the manager.
//! Handlers are thin: they parse the request, run one library call on the
//! blocking pool, and shape the response.

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::Router;
use tablebook::DatabaseConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Settings used to open a store connection per request.
    pub db_config: DatabaseConfig,
}

impl AppState {
    /// Creates state that opens `db_config` for every request.
    pub fn new(db_config: DatabaseConfig) -> Self {
        Self { db_config }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/reserva", post(handlers::create))
        .route("/reserva/{id}", delete(handlers::cancel))
        .route("/confirmar/{id}", post(handlers::confirm))
        .route("/finalizar/{id}", post(handlers::finalize))
        .route("/mesa/{mesa}/disponibilidade", get(handlers::availability))
        .route("/relatorio/periodo", get(handlers::report_period))
        .route("/relatorio/mesa/{mesa}", get(handlers::report_table))
        .route("/relatorio/garcom/{nome}", get(handlers::report_server))
        .route("/reservas-disponiveis", get(handlers::pending))
        .route("/mesas-em-uso", get(handlers::in_use))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{method} {path} {} {}ms",
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

/// Serves the API on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
