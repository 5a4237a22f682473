//! DSA problem endpoints

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use prep_core::model::{ProblemDraft, ProblemFilter, ProblemId};
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::{ValidForm, ValidId};
use crate::vm::ProblemListVm;

/// Listing filters from the query string. Blank values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProblemQuery {
    pub difficulty: Option<String>,
    pub status: Option<String>,
}

impl From<ProblemQuery> for ProblemFilter {
    fn from(q: ProblemQuery) -> Self {
        ProblemFilter::new(q.difficulty, q.status)
    }
}

async fn render_list(ctx: &AppContext, filter: ProblemFilter) -> Result<Json<ProblemListVm>, ApiError> {
    let problems = ctx.problems().list_problems(&filter).await?;
    Ok(Json(ProblemListVm::new(problems)))
}

/// GET /dsa - list problems, optionally filtered
async fn list_problems(
    State(ctx): State<AppContext>,
    Query(query): Query<ProblemQuery>,
) -> Result<Json<ProblemListVm>, ApiError> {
    render_list(&ctx, query.into()).await
}

/// POST /dsa - create a problem, then list with the same filters
async fn create_problem(
    State(ctx): State<AppContext>,
    Query(query): Query<ProblemQuery>,
    ValidForm(draft): ValidForm<ProblemDraft>,
) -> Result<Json<ProblemListVm>, ApiError> {
    ctx.problems().create_problem(draft).await?;
    render_list(&ctx, query.into()).await
}

/// GET /delete/dsa/{id} - delete, then back to the listing
async fn delete_problem(
    State(ctx): State<AppContext>,
    ValidId(id): ValidId<ProblemId>,
) -> Result<Redirect, ApiError> {
    ctx.problems().delete_problem(id).await?;
    Ok(Redirect::to("/dsa"))
}

pub fn router() -> Router<AppContext> {
    Router::new()
        .route("/dsa", get(list_problems).post(create_problem))
        .route("/delete/dsa/{id}", get(delete_problem))
}
