//! Mock test endpoints

use axum::extract::State;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use prep_core::model::{MockTestDraft, MockTestId};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::{ValidForm, ValidId};
use crate::vm::MockTestListVm;

async fn render_list(ctx: &AppContext) -> Result<Json<MockTestListVm>, ApiError> {
    let service = ctx.mock_tests();
    let tests = service.list_mock_tests().await?;
    let avg_score = service.average_score().await?;
    Ok(Json(MockTestListVm::new(tests, avg_score)))
}

/// GET /mocktests - list with rounded average
async fn list_mock_tests(State(ctx): State<AppContext>) -> Result<Json<MockTestListVm>, ApiError> {
    render_list(&ctx).await
}

/// POST /mocktests - record an attempt, then list
async fn create_mock_test(
    State(ctx): State<AppContext>,
    ValidForm(draft): ValidForm<MockTestDraft>,
) -> Result<Json<MockTestListVm>, ApiError> {
    ctx.mock_tests().create_mock_test(draft).await?;
    render_list(&ctx).await
}

/// GET /delete/mocktests/{id}
async fn delete_mock_test(
    State(ctx): State<AppContext>,
    ValidId(id): ValidId<MockTestId>,
) -> Result<Redirect, ApiError> {
    ctx.mock_tests().delete_mock_test(id).await?;
    Ok(Redirect::to("/mocktests"))
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/mocktests", get(list_mock_tests).post(create_mock_test))
        .route("/delete/mocktests/{id}", get(delete_mock_test))
}
