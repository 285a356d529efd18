//! Field-by-field checks that every served entity reads back from its JSON
//! exactly as it was stored, including optional dates and numeric `gpa`.

mod common;

use chrono::{DateTime, NaiveDate, Utc};
use common::{body_json, date, get, insert_user};
use folio_core::contact::ContactSubmission;
use folio_db::models::achievement::CreateAchievement;
use folio_db::models::blog_post::CreateBlogPost;
use folio_db::models::certification::CreateCertification;
use folio_db::models::education::CreateEducation;
use folio_db::models::experience::CreateExperience;
use folio_db::models::profile::CreateProfile;
use folio_db::models::project::CreateProject;
use folio_db::models::skill::CreateSkill;
use folio_db::repositories::{
    AchievementRepo, BlogPostRepo, CertificationRepo, ContactRepo, EducationRepo, ExperienceRepo,
    ProfileRepo, ProjectRepo, SkillRepo,
};
use serde_json::Value;
use sqlx::PgPool;

fn text(value: &Value) -> &str {
    value.as_str().unwrap()
}

fn opt_text(value: &Value) -> Option<&str> {
    (!value.is_null()).then(|| text(value))
}

fn date_of(value: &Value) -> NaiveDate {
    NaiveDate::parse_from_str(text(value), "%Y-%m-%d").unwrap()
}

fn opt_date_of(value: &Value) -> Option<NaiveDate> {
    (!value.is_null()).then(|| date_of(value))
}

fn timestamp_of(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text(value))
        .unwrap()
        .with_timezone(&Utc)
}

fn only(json: Value) -> Value {
    let mut rows = json.as_array().unwrap().clone();
    assert_eq!(rows.len(), 1);
    rows.remove(0)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_and_user_fields(pool: PgPool) {
    let user = insert_user(&pool, "owner").await;
    let profile = ProfileRepo::create(
        &pool,
        &CreateProfile {
            user_id: user.id,
            avatar: Some("profiles/me.png".to_string()),
            bio: Some("Security engineer".to_string()),
            location: Some("Hanoi".to_string()),
            birth_date: Some(date(1998, 2, 28)),
            website: Some("https://example.com".to_string()),
            phone: None,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let row = only(body_json(get(app, "/api/profiles/").await).await);

    assert_eq!(row["id"].as_i64(), Some(profile.id));
    assert_eq!(opt_text(&row["avatar"]), profile.avatar.as_deref());
    assert_eq!(opt_text(&row["bio"]), profile.bio.as_deref());
    assert_eq!(opt_text(&row["location"]), profile.location.as_deref());
    assert_eq!(opt_date_of(&row["birth_date"]), profile.birth_date);
    assert_eq!(opt_text(&row["website"]), profile.website.as_deref());
    assert_eq!(opt_text(&row["phone"]), None);
    assert!(row.get("user_id").is_none());

    let embedded = &row["user"];
    assert_eq!(embedded["id"].as_i64(), Some(user.id));
    assert_eq!(text(&embedded["username"]), user.username);
    assert_eq!(text(&embedded["email"]), user.email);
    assert_eq!(opt_text(&embedded["first_name"]), user.first_name.as_deref());
    assert_eq!(opt_text(&embedded["last_name"]), user.last_name.as_deref());
    assert!(embedded.get("created_at").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_and_project_fields(pool: PgPool) {
    let skill = SkillRepo::create(
        &pool,
        &CreateSkill {
            name: "Rust".to_string(),
            skill_type: "tech".to_string(),
            proficiency: Some(75),
            description: Some("Systems programming".to_string()),
            icon: Some("fab fa-rust".to_string()),
        },
    )
    .await
    .unwrap();
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            title: "scanner".to_string(),
            description: "Port scanner".to_string(),
            image: None,
            url: Some("https://scanner.example.com".to_string()),
            github_url: Some("https://github.com/example/scanner".to_string()),
            featured: Some(true),
            skill_ids: vec![skill.id],
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let row = only(body_json(get(app, "/api/skills/").await).await);
    assert_eq!(row["id"].as_i64(), Some(skill.id));
    assert_eq!(text(&row["name"]), skill.name);
    assert_eq!(text(&row["skill_type"]), skill.skill_type);
    assert_eq!(row["proficiency"].as_i64(), Some(i64::from(skill.proficiency)));
    assert_eq!(opt_text(&row["description"]), skill.description.as_deref());
    assert_eq!(opt_text(&row["icon"]), skill.icon.as_deref());

    let app = common::build_test_app(pool);
    let row = only(body_json(get(app, "/api/projects/").await).await);
    assert_eq!(row["id"].as_i64(), Some(project.id));
    assert_eq!(text(&row["title"]), project.title);
    assert_eq!(text(&row["description"]), project.description);
    assert_eq!(opt_text(&row["image"]), None);
    assert_eq!(opt_text(&row["url"]), project.url.as_deref());
    assert_eq!(opt_text(&row["github_url"]), project.github_url.as_deref());
    assert_eq!(row["featured"].as_bool(), Some(project.featured));
    assert_eq!(timestamp_of(&row["created_at"]), project.created_at);
    assert_eq!(timestamp_of(&row["updated_at"]), project.updated_at);
    assert_eq!(row["technologies"][0]["id"].as_i64(), Some(skill.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_experience_and_education_fields(pool: PgPool) {
    let experience = ExperienceRepo::create(
        &pool,
        &CreateExperience {
            title: "Engineer".to_string(),
            company: "Company".to_string(),
            location: Some("Remote".to_string()),
            start_date: date(2023, 1, 31),
            end_date: None,
            current: Some(true),
            description: "Pentesting".to_string(),
            skill_ids: vec![],
        },
    )
    .await
    .unwrap();
    let education = EducationRepo::create(
        &pool,
        &CreateEducation {
            degree: "Bachelor".to_string(),
            institution: "University".to_string(),
            field_of_study: "Information Security".to_string(),
            start_date: date(2019, 9, 1),
            end_date: Some(date(2023, 6, 30)),
            current: Some(false),
            description: None,
            gpa: Some(3.5),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let row = only(body_json(get(app, "/api/experiences/").await).await);
    assert_eq!(row["id"].as_i64(), Some(experience.id));
    assert_eq!(text(&row["title"]), experience.title);
    assert_eq!(text(&row["company"]), experience.company);
    assert_eq!(opt_text(&row["location"]), experience.location.as_deref());
    assert_eq!(date_of(&row["start_date"]), experience.start_date);
    assert_eq!(opt_date_of(&row["end_date"]), None);
    assert_eq!(row["current"].as_bool(), Some(experience.current));
    assert_eq!(text(&row["description"]), experience.description);
    assert_eq!(row["skills_used"], serde_json::json!([]));

    let app = common::build_test_app(pool);
    let row = only(body_json(get(app, "/api/education/").await).await);
    assert_eq!(row["id"].as_i64(), Some(education.id));
    assert_eq!(text(&row["degree"]), education.degree);
    assert_eq!(text(&row["institution"]), education.institution);
    assert_eq!(text(&row["field_of_study"]), education.field_of_study);
    assert_eq!(date_of(&row["start_date"]), education.start_date);
    assert_eq!(opt_date_of(&row["end_date"]), education.end_date);
    assert_eq!(row["current"].as_bool(), Some(education.current));
    assert_eq!(opt_text(&row["description"]), None);
    assert_eq!(row["gpa"].as_f64(), education.gpa);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_certification_and_achievement_fields(pool: PgPool) {
    let certification = CertificationRepo::create(
        &pool,
        &CreateCertification {
            name: "OSCP".to_string(),
            issuer: "OffSec".to_string(),
            issue_date: date(2023, 10, 1),
            expiry_date: Some(date(2026, 10, 1)),
            credential_id: Some("OS-123".to_string()),
            credential_url: Some("https://example.com/verify".to_string()),
            image: None,
            description: Some("Offensive security".to_string()),
        },
    )
    .await
    .unwrap();
    let achievement = AchievementRepo::create(
        &pool,
        &CreateAchievement {
            title: "CTF finalist".to_string(),
            description: "Top ten".to_string(),
            achievement_type: Some("competition".to_string()),
            date: date(2024, 8, 8),
            organization: Some("Organizer".to_string()),
            url: None,
            image: Some("achievements/ctf.png".to_string()),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let row = only(body_json(get(app, "/api/certifications/").await).await);
    assert_eq!(row["id"].as_i64(), Some(certification.id));
    assert_eq!(text(&row["name"]), certification.name);
    assert_eq!(text(&row["issuer"]), certification.issuer);
    assert_eq!(date_of(&row["issue_date"]), certification.issue_date);
    assert_eq!(opt_date_of(&row["expiry_date"]), certification.expiry_date);
    assert_eq!(opt_text(&row["credential_id"]), certification.credential_id.as_deref());
    assert_eq!(opt_text(&row["credential_url"]), certification.credential_url.as_deref());
    assert_eq!(opt_text(&row["image"]), None);
    assert_eq!(opt_text(&row["description"]), certification.description.as_deref());

    let app = common::build_test_app(pool);
    let row = only(body_json(get(app, "/api/achievements/").await).await);
    assert_eq!(row["id"].as_i64(), Some(achievement.id));
    assert_eq!(text(&row["title"]), achievement.title);
    assert_eq!(text(&row["description"]), achievement.description);
    assert_eq!(opt_text(&row["achievement_type"]), achievement.achievement_type.as_deref());
    assert_eq!(date_of(&row["date"]), achievement.date);
    assert_eq!(opt_text(&row["organization"]), achievement.organization.as_deref());
    assert_eq!(opt_text(&row["url"]), None);
    assert_eq!(opt_text(&row["image"]), achievement.image.as_deref());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blog_post_fields(pool: PgPool) {
    let author = insert_user(&pool, "writer").await;
    let post = BlogPostRepo::create(
        &pool,
        &CreateBlogPost {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            content: "Body".to_string(),
            excerpt: None,
            image: Some("blog/hello.png".to_string()),
            author_id: author.id,
            status: Some("published".to_string()),
            tags: Some("rust,security".to_string()),
            published_at: Some(Utc::now() - chrono::Duration::hours(1)),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let row = only(body_json(get(app, "/api/blog/").await).await);

    assert_eq!(row["id"].as_i64(), Some(post.id));
    assert_eq!(text(&row["title"]), post.title);
    assert_eq!(text(&row["slug"]), post.slug);
    assert_eq!(text(&row["content"]), post.content);
    assert_eq!(opt_text(&row["excerpt"]), None);
    assert_eq!(opt_text(&row["image"]), post.image.as_deref());
    assert_eq!(text(&row["status"]), post.status);
    assert_eq!(opt_text(&row["tags"]), post.tags.as_deref());
    assert_eq!(timestamp_of(&row["created_at"]), post.created_at);
    assert_eq!(timestamp_of(&row["updated_at"]), post.updated_at);
    assert_eq!(Some(timestamp_of(&row["published_at"])), post.published_at);
    assert!(row.get("author_id").is_none());
    assert_eq!(row["author"]["id"].as_i64(), Some(author.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_fields(pool: PgPool) {
    let contact = ContactRepo::create(
        &pool,
        &ContactSubmission {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
        },
    )
    .await
    .unwrap();

    let row = serde_json::to_value(&contact).unwrap();

    assert_eq!(row["id"].as_i64(), Some(contact.id));
    assert_eq!(text(&row["name"]), contact.name);
    assert_eq!(text(&row["email"]), contact.email);
    assert_eq!(text(&row["subject"]), contact.subject);
    assert_eq!(text(&row["message"]), contact.message);
    assert_eq!(timestamp_of(&row["created_at"]), contact.created_at);
    assert_eq!(row["read"].as_bool(), Some(false));
}
