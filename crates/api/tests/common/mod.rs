#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use folio_api::config::{CorsOrigins, ServerConfig, DEFAULT_MAX_BODY_BYTES};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::models::blog_post::{BlogPost, CreateBlogPost};
use folio_db::models::project::{CreateProject, Project};
use folio_db::models::skill::{CreateSkill, Skill};
use folio_db::models::user::{CreateUser, User};
use folio_db::repositories::{BlogPostRepo, ProjectRepo, SkillRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Path relative to the workspace root.
fn workspace_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Admits any CORS origin, points the page routes at the workspace's
/// `templates/` and `static/`, and never seeds.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: String::new(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        db_max_connections: 5,
        max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        static_dir: workspace_path("static"),
        index_file: workspace_path("templates/index.html"),
        seed_on_startup: false,
    }
}

/// Build the full application router through the same builder `main.rs` uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState { pool }, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn insert_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: Some("Tuan".to_string()),
            last_name: Some("Anh".to_string()),
        },
    )
    .await
    .unwrap()
}

pub async fn insert_skill(pool: &PgPool, name: &str, skill_type: &str, proficiency: i32) -> Skill {
    SkillRepo::create(
        pool,
        &CreateSkill {
            name: name.to_string(),
            skill_type: skill_type.to_string(),
            proficiency: Some(proficiency),
            description: None,
            icon: None,
        },
    )
    .await
    .unwrap()
}

pub async fn insert_project(
    pool: &PgPool,
    title: &str,
    featured: bool,
    skill_ids: Vec<i64>,
) -> Project {
    ProjectRepo::create(
        pool,
        &CreateProject {
            title: title.to_string(),
            description: format!("About {title}"),
            image: None,
            url: None,
            github_url: None,
            featured: Some(featured),
            skill_ids,
        },
    )
    .await
    .unwrap()
}

pub async fn insert_post(
    pool: &PgPool,
    author_id: i64,
    slug: &str,
    status: &str,
    hours_ago: i64,
) -> BlogPost {
    BlogPostRepo::create(
        pool,
        &CreateBlogPost {
            title: slug.to_string(),
            slug: slug.to_string(),
            content: "Content".to_string(),
            excerpt: Some("Excerpt".to_string()),
            image: None,
            author_id,
            status: Some(status.to_string()),
            tags: None,
            published_at: Some(chrono::Utc::now() - chrono::Duration::hours(hours_ago)),
        },
    )
    .await
    .unwrap()
}
