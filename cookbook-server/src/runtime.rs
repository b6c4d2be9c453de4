use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::RwLock;

use cookbook_core::{seed, Registry};

use crate::config::{LogFormat, ServerConfig};
use crate::error::{io_err, ServerError};
use crate::routes::{create_router, SharedRegistry};

/// Start the server runtime and block the current thread until it exits.
pub fn start_blocking(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing(config.log_format);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| io_err("tokio-runtime", e))?;
    runtime.block_on(run(config))
}

/// Seed the registry, bind, and serve until ctrl-c.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let registry = load_registry(config.seed.as_deref())?;
    tracing::info!(entries = registry.len(), "registry ready");

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;
    let local = listener.local_addr().map_err(|e| io_err("listener address", e))?;
    tracing::info!(addr = %local, "listening");

    serve(listener, Arc::new(RwLock::new(registry)), shutdown_signal()).await
}

/// Serve HTTP on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    registry: SharedRegistry,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router(registry))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| io_err("http serve", e))
}

fn load_registry(seed: Option<&Path>) -> Result<Registry, ServerError> {
    match seed {
        Some(path) => {
            tracing::info!(path = %path.display(), "seeding registry");
            Ok(seed::registry_from_file(path)?)
        }
        None => Ok(Registry::new()),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received ctrl-c, shutting down server"),
        Err(err) => {
            tracing::error!(error = %err, "ctrl-c handler failed; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_target(false);
    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
