//! Dashboard endpoint

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::vm::DashboardVm;

/// GET / - totals and completion percentages
async fn dashboard(State(ctx): State<AppContext>) -> Result<Json<DashboardVm>, ApiError> {
    let summary = ctx.dashboard().summary().await?;
    Ok(Json(DashboardVm::from(summary)))
}

pub fn router() -> Router<AppContext> {
    Router::new().route("/", get(dashboard))
}
