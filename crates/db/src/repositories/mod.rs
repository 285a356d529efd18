//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Insert methods accept any Postgres
//! executor so seeding can run them inside a transaction.

pub mod achievement_repo;
pub mod blog_post_repo;
pub mod certification_repo;
pub mod contact_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod portfolio_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod skill_repo;
pub mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use blog_post_repo::BlogPostRepo;
pub use certification_repo::CertificationRepo;
pub use contact_repo::ContactRepo;
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use portfolio_repo::PortfolioRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
