use axum::extract::State;
use axum::Json;
use folio_db::models::blog_post::BlogPostWithAuthor;
use folio_db::repositories::BlogPostRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/blog/
///
/// Published posts only, most recently published first, each with its author.
pub async fn list_blog_posts(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BlogPostWithAuthor>>> {
    let posts = BlogPostRepo::list_published_with_author(&state.pool, None).await?;
    Ok(Json(posts))
}
