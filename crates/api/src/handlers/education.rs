use axum::extract::State;
use axum::Json;
use folio_db::models::education::Education;
use folio_db::repositories::EducationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/education/
pub async fn list_education(State(state): State<AppState>) -> AppResult<Json<Vec<Education>>> {
    Ok(Json(EducationRepo::list(&state.pool).await?))
}
