//! Handler for the aggregate portfolio read.

use axum::extract::State;
use axum::Json;
use folio_db::models::portfolio::Portfolio;
use folio_db::repositories::PortfolioRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/portfolio/
///
/// Everything the landing page needs in one response. Any failing sub-read
/// fails the whole request.
pub async fn get_portfolio(State(state): State<AppState>) -> AppResult<Json<Portfolio>> {
    let portfolio = PortfolioRepo::snapshot(&state.pool).await?;

    tracing::debug!(
        has_profile = portfolio.profile.is_some(),
        projects = portfolio.projects.len(),
        blog_posts = portfolio.blog_posts.len(),
        "Portfolio snapshot assembled",
    );

    Ok(Json(portfolio))
}
