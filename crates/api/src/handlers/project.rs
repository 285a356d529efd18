use axum::extract::{Query, State};
use axum::Json;
use folio_core::query::parse_featured_flag;
use folio_db::models::project::ProjectWithTechnologies;
use folio_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::query::{ProjectListParams, QueryPairs};
use crate::state::AppState;

/// GET /api/projects/?featured=
///
/// Newest first. `featured=true` (any case) keeps featured projects, any
/// other non-empty value keeps the rest.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<ProjectWithTechnologies>>> {
    let params = ProjectListParams::from_pairs(&pairs);
    let featured = parse_featured_flag(params.featured.as_deref());
    let projects = ProjectRepo::list_with_technologies(&state.pool, featured).await?;

    tracing::debug!(?featured, count = projects.len(), "Listed projects");

    Ok(Json(projects))
}
