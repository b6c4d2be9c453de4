//! HTTP transport for the cookbook registry: axum router, tracing setup, and
//! the serve loop.

pub mod config;
mod error;
pub mod protocol;
pub mod routes;
mod runtime;

pub use config::{LogFormat, ServerConfig};
pub use error::ServerError;
pub use protocol::{ErrorResponse, IngredientQuantity, ParseRequest, ParseResponse, SummaryResponse};
pub use routes::{create_router, SharedRegistry};
pub use runtime::{run, serve, start_blocking};
