//! Axum router and request handlers.
//!
//! Every core failure maps to `400`; the body names the failure code but
//! clients should only rely on the status.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::sync::RwLock;

use cookbook_core::{normalize, summarize, RawEntry, Registry};

use crate::protocol::{
    ErrorResponse, HealthResponse, ParseRequest, ParseResponse, SummaryQuery, SummaryResponse,
};

/// The registry shared by all handlers. `register` holds the write lock for
/// the whole validate-and-insert; `summarize` holds the read lock for the
/// whole traversal.
pub type SharedRegistry = Arc<RwLock<Registry>>;

const UNPARSEABLE: &str = "this string is cooked";

/// Build the application router over `registry`.
pub fn create_router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/parse", post(parse))
        .route("/entry", post(add_entry))
        .route("/summary", get(summary))
        .with_state(registry)
}

/// GET /health
async fn health(State(registry): State<SharedRegistry>) -> Json<HealthResponse> {
    let entries = registry.read().await.len();
    Json(HealthResponse {
        status: "ok".to_string(),
        entries,
    })
}

/// POST /parse
async fn parse(payload: Result<Json<ParseRequest>, JsonRejection>) -> Response {
    let normalized = payload
        .ok()
        .and_then(|Json(request)| normalize(&request.input));
    match normalized {
        Some(msg) => Json(ParseResponse { msg }).into_response(),
        None => (StatusCode::BAD_REQUEST, UNPARSEABLE).into_response(),
    }
}

/// POST /entry
async fn add_entry(
    State(registry): State<SharedRegistry>,
    payload: Result<Json<RawEntry>, JsonRejection>,
) -> Response {
    let raw = match payload {
        Ok(Json(raw)) => raw,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "malformed entry body");
            return bad_request(ErrorResponse::new("invalid_body", rejection.body_text()));
        }
    };

    let result = registry.write().await.register(raw);
    match result {
        Ok(name) => {
            tracing::info!(entry = %name, "registered entry");
            StatusCode::OK.into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected entry");
            bad_request(ErrorResponse::from(&err))
        }
    }
}

/// GET /summary?name=<recipe>
async fn summary(
    State(registry): State<SharedRegistry>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let Some(name) = query.name.filter(|n| !n.is_empty()) else {
        return bad_request(ErrorResponse::new("missing_name", "query parameter 'name' is required"));
    };

    let result = summarize(&*registry.read().await, &name);
    match result {
        Ok(summary) => {
            tracing::debug!(recipe = %summary.name, cook_time = summary.cook_time, "summarized");
            Json(SummaryResponse::from(summary)).into_response()
        }
        Err(err) => {
            tracing::warn!(recipe = %name, error = %err, "summary failed");
            bad_request(ErrorResponse::from(&err))
        }
    }
}

fn bad_request(body: ErrorResponse) -> Response {
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
