use axum::Router;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

pub mod dashboard;
pub mod dsa;
pub mod health;
pub mod mocktests;
pub mod subjects;

/// Build the application router with all routes.
pub fn build_router(ctx: AppContext) -> Router {
    Router::new()
        .merge(dashboard::router())
        .merge(dsa::router())
        .merge(subjects::router())
        .merge(mocktests::router())
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
