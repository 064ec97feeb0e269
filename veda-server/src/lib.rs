//! Read-only HTTP API over the reference catalogue.
//!
//! Two `GET` routes are exposed:
//!
//! - `/data-elements` lists data elements, or returns one by exact title when
//!   `de_title` is supplied.
//! - `/purposes` lists purposes.
//!
//! List responses use the pagination envelope `{total, offset, limit, data}`.
//! Every body these routes produce is JSON, including the `405` sent for
//! other methods; errors carry a single `error` field. Unknown paths fall
//! through to axum's empty `404`.
#![forbid(unsafe_code)]

mod error;
mod handlers;
mod response;
mod state;

use axum::{Router, routing::get};
use log::{info, warn};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub use error::ServeError;
pub use response::{ENCODE_FAILURE_BODY, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE};
pub use state::AppState;

/// Route for listing or looking up data elements.
pub const DATA_ELEMENTS_ROUTE: &str = "/data-elements";
/// Route for listing purposes.
pub const PURPOSES_ROUTE: &str = "/purposes";

/// Build the catalogue router. Methods other than `GET` and `HEAD` receive a
/// JSON `405`.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            DATA_ELEMENTS_ROUTE,
            get(handlers::data_elements).fallback(handlers::method_not_allowed),
        )
        .route(
            PURPOSES_ROUTE,
            get(handlers::purposes).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C is received.
///
/// # Errors
/// Returns [`ServeError::Bind`] when the listener cannot be bound and
/// [`ServeError::Serve`] when the server loop fails.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<(), ServeError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    let local = listener.local_addr().unwrap_or(addr);
    info!("serving catalogue on http://{local}");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)?;
    info!("server stopped");
    Ok(())
}

/// Run [`serve`] on a dedicated multi-threaded runtime, blocking the caller.
///
/// # Errors
/// Returns [`ServeError::Runtime`] when the runtime cannot be built, plus any
/// error from [`serve`].
pub fn serve_blocking(state: AppState, addr: SocketAddr) -> Result<(), ServeError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServeError::Runtime)?;
    runtime.block_on(serve(state, addr))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            warn!("cannot listen for Ctrl-C, serving until killed: {err}");
            std::future::pending::<()>().await;
        }
    }
}
