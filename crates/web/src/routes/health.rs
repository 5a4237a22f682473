//! Health endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::context::AppContext;
use crate::error::ApiError;

/// GET /health - liveness plus store reachability
async fn health(State(ctx): State<AppContext>) -> Result<Json<Value>, ApiError> {
    ctx.services().ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}

pub fn router() -> Router<AppContext> {
    Router::new().route("/health", get(health))
}
