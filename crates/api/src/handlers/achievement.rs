use axum::extract::State;
use axum::Json;
use folio_db::models::achievement::Achievement;
use folio_db::repositories::AchievementRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/achievements/
pub async fn list_achievements(State(state): State<AppState>) -> AppResult<Json<Vec<Achievement>>> {
    Ok(Json(AchievementRepo::list(&state.pool).await?))
}
