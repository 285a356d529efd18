pub mod health;
pub mod pages;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /portfolio/                      aggregate snapshot
/// /profiles/                       list profiles
/// /skills/?type=                   list skills, optional type filter
/// /skills/grouped/                 skills grouped by category
/// /projects/?featured=             list projects, optional featured filter
/// /experiences/                    list experiences
/// /education/                      list education
/// /certifications/                 list certifications
/// /achievements/                   list achievements
/// /blog/                           list published posts
/// /contact/                        submit a contact message (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/portfolio/", get(handlers::portfolio::get_portfolio))
        .route("/profiles/", get(handlers::profile::list_profiles))
        .route("/skills/", get(handlers::skill::list_skills))
        .route("/skills/grouped/", get(handlers::skill::list_skills_grouped))
        .route("/projects/", get(handlers::project::list_projects))
        .route("/experiences/", get(handlers::experience::list_experiences))
        .route("/education/", get(handlers::education::list_education))
        .route(
            "/certifications/",
            get(handlers::certification::list_certifications),
        )
        .route("/achievements/", get(handlers::achievement::list_achievements))
        .route("/blog/", get(handlers::blog::list_blog_posts))
        .route("/contact/", post(handlers::contact::submit_contact))
}
