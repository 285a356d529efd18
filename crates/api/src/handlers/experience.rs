use axum::extract::State;
use axum::Json;
use folio_db::models::experience::ExperienceWithSkills;
use folio_db::repositories::ExperienceRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/experiences/
pub async fn list_experiences(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ExperienceWithSkills>>> {
    let experiences = ExperienceRepo::list_with_skills(&state.pool).await?;
    Ok(Json(experiences))
}
