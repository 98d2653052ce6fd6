//! Top-level server errors surfaced from `main`.

use std::net::SocketAddr;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Environment or Leptos configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The listener could not bind to the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
