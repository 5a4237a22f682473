//! Subject endpoints

use axum::extract::State;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use prep_core::model::{SubjectDraft, SubjectId};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::{ValidForm, ValidId};
use crate::vm::SubjectListVm;

async fn render_list(ctx: &AppContext) -> Result<Json<SubjectListVm>, ApiError> {
    let subjects = ctx.subjects().list_subjects().await?;
    Ok(Json(SubjectListVm::new(subjects)))
}

/// GET /subjects
async fn list_subjects(State(ctx): State<AppContext>) -> Result<Json<SubjectListVm>, ApiError> {
    render_list(&ctx).await
}

/// POST /subjects - create, then list everything
async fn create_subject(
    State(ctx): State<AppContext>,
    ValidForm(draft): ValidForm<SubjectDraft>,
) -> Result<Json<SubjectListVm>, ApiError> {
    ctx.subjects().create_subject(draft).await?;
    render_list(&ctx).await
}

/// GET /delete/subjects/{id}
async fn delete_subject(
    State(ctx): State<AppContext>,
    ValidId(id): ValidId<SubjectId>,
) -> Result<Redirect, ApiError> {
    ctx.subjects().delete_subject(id).await?;
    Ok(Redirect::to("/subjects"))
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/subjects", get(list_subjects).post(create_subject))
        .route("/delete/subjects/{id}", get(delete_subject))
}
