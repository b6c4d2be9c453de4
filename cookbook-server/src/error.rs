use std::net::SocketAddr;

use thiserror::Error;

/// Error surface for server startup and the serve loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error in {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("registry error: {0}")]
    Registry(#[from] cookbook_core::CookbookError),
}

pub(crate) fn io_err(context: &'static str, source: std::io::Error) -> ServerError {
    ServerError::Io { context, source }
}
