//! HTTP-level tests for `GET /api/portfolio/`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, insert_post, insert_project, insert_skill, insert_user};
use folio_db::models::profile::CreateProfile;
use folio_db::repositories::ProfileRepo;
use folio_db::seed::seed_if_empty;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_store_returns_all_keys(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/portfolio/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert!(json["profile"].is_null());
    for key in [
        "skills",
        "projects",
        "experiences",
        "education",
        "certifications",
        "achievements",
        "blog_posts",
    ] {
        assert_eq!(json[key], serde_json::json!([]), "{key} should be empty");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_embeds_owner(pool: PgPool) {
    let owner = insert_user(&pool, "tuananh").await;
    ProfileRepo::create(
        &pool,
        &CreateProfile {
            user_id: owner.id,
            avatar: Some("avatars/me.png".to_string()),
            bio: Some("Security engineer".to_string()),
            location: Some("Vietnam".to_string()),
            birth_date: None,
            website: None,
            phone: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/portfolio/").await).await;

    let profile = &json["profile"];
    assert_eq!(profile["bio"], "Security engineer");
    assert_eq!(profile["avatar"], "avatars/me.png");
    assert!(profile["birth_date"].is_null());
    assert_eq!(profile["user"]["id"], owner.id);
    assert_eq!(profile["user"]["username"], "tuananh");
    assert_eq!(profile["user"]["first_name"], "Tuan");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_only_featured_projects_and_ten_posts(pool: PgPool) {
    let rust = insert_skill(&pool, "Rust", "tech", 90).await;
    insert_project(&pool, "shown", true, vec![rust.id]).await;
    insert_project(&pool, "hidden", false, vec![]).await;

    let author = insert_user(&pool, "author").await;
    for i in 0..11 {
        insert_post(&pool, author.id, &format!("post-{i}"), "published", i).await;
    }
    insert_post(&pool, author.id, "draft", "draft", 0).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/portfolio/").await).await;

    let projects = json["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "shown");
    assert_eq!(projects[0]["technologies"][0]["name"], "Rust");

    let posts = json["blog_posts"].as_array().unwrap();
    assert_eq!(posts.len(), 10);
    assert!(posts.iter().all(|p| p["status"] == "published"));

    let app = common::build_test_app(pool);
    let all = body_json(get(app, "/api/blog/").await).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 11);
    for (capped, full) in posts.iter().zip(all.iter()) {
        assert_eq!(capped["id"], full["id"]);
    }
    assert_eq!(posts[0]["author"]["username"], "author");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_store_snapshot(pool: PgPool) {
    seed_if_empty(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/portfolio/").await).await;

    assert_eq!(json["profile"]["user"]["username"], "tuananh");
    assert_eq!(json["skills"].as_array().unwrap().len(), 22);
    assert_eq!(json["experiences"].as_array().unwrap().len(), 2);
    assert_eq!(json["education"].as_array().unwrap().len(), 3);
    assert_eq!(json["experiences"][0]["title"], "AppSec Engineer");
    assert_eq!(json["experiences"][0]["skills_used"].as_array().unwrap().len(), 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failure_returns_500_without_partial_body(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    sqlx::query("DROP TABLE achievements")
        .execute(&pool)
        .await
        .unwrap();

    let response = get(app, "/api/portfolio/").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(json.get("skills").is_none());
}
