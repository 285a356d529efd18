//! Handlers for the skill listings.

use axum::extract::{Query, State};
use axum::Json;
use folio_core::query::non_empty;
use folio_db::models::skill::{GroupedSkills, Skill};
use folio_db::repositories::SkillRepo;

use crate::error::AppResult;
use crate::query::{QueryPairs, SkillListParams};
use crate::state::AppState;

/// GET /api/skills/?type=
///
/// Skills ranked by proficiency (highest first), then name. A `type` value
/// narrows the list to that category; an empty value is ignored and only
/// the first of repeated `type` keys counts.
pub async fn list_skills(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<Vec<Skill>>> {
    let params = SkillListParams::from_pairs(&pairs);
    let skill_type = non_empty(params.skill_type.as_deref());
    let skills = SkillRepo::list_ranked(&state.pool, skill_type).await?;

    tracing::debug!(?skill_type, count = skills.len(), "Listed skills");

    Ok(Json(skills))
}

/// GET /api/skills/grouped/
pub async fn list_skills_grouped(State(state): State<AppState>) -> AppResult<Json<GroupedSkills>> {
    let grouped = SkillRepo::grouped(&state.pool).await?;
    Ok(Json(grouped))
}
