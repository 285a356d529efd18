use axum::extract::State;
use axum::Json;
use folio_db::models::certification::Certification;
use folio_db::repositories::CertificationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/certifications/
pub async fn list_certifications(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Certification>>> {
    Ok(Json(CertificationRepo::list(&state.pool).await?))
}
