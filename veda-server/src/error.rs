//! Errors raised while running the HTTP server.

use std::net::SocketAddr;
use thiserror::Error;

/// Failures that stop the server.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The async runtime could not be started.
    #[error("failed to build tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Requested listen address.
        addr: SocketAddr,
        /// Source error from the socket layer.
        #[source]
        source: std::io::Error,
    },
    /// The accept loop terminated with an error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
