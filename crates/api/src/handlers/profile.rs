use axum::extract::State;
use axum::Json;
use folio_db::models::profile::ProfileWithUser;
use folio_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/profiles/
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<Vec<ProfileWithUser>>> {
    let profiles = ProfileRepo::list_with_user(&state.pool).await?;
    Ok(Json(profiles))
}
