//! JSON bodies exchanged over HTTP.
//!
//! Entry submissions deserialize straight into [`cookbook_core::RawEntry`];
//! everything else is defined here.

use serde::{Deserialize, Serialize};

use cookbook_core::{CookbookError, Summary};

/// Body of `POST /parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    pub input: String,
}

/// Successful `POST /parse` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Query string of `GET /summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

/// One aggregated ingredient in a [`SummaryResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

/// Successful `GET /summary` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            name: summary.name.0,
            cook_time: summary.cook_time,
            ingredients: summary
                .ingredients
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity {
                    name: name.0,
                    quantity,
                })
                .collect(),
        }
    }
}

/// Error body for every `400` that carries JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

impl From<&CookbookError> for ErrorResponse {
    fn from(err: &CookbookError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// `GET /health` reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub entries: usize,
}
