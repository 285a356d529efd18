//! Aggregate read across every portfolio table.

use folio_core::blog::AGGREGATE_POST_LIMIT;
use sqlx::PgPool;

use crate::models::portfolio::Portfolio;
use crate::repositories::{
    AchievementRepo, BlogPostRepo, CertificationRepo, EducationRepo, ExperienceRepo,
    ProfileRepo, ProjectRepo, SkillRepo,
};

/// Builds the combined portfolio snapshot.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Read every section of the portfolio.
    ///
    /// Sub-queries run concurrently; the first failure aborts the whole read
    /// so a partial snapshot is never returned.
    pub async fn snapshot(pool: &PgPool) -> Result<Portfolio, sqlx::Error> {
        let (
            profile,
            skills,
            projects,
            experiences,
            education,
            certifications,
            achievements,
            blog_posts,
        ) = tokio::try_join!(
            ProfileRepo::first_with_user(pool),
            SkillRepo::list(pool),
            ProjectRepo::list_with_technologies(pool, Some(true)),
            ExperienceRepo::list_with_skills(pool),
            EducationRepo::list(pool),
            CertificationRepo::list(pool),
            AchievementRepo::list(pool),
            BlogPostRepo::list_published_with_author(pool, Some(AGGREGATE_POST_LIMIT)),
        )?;

        Ok(Portfolio {
            profile,
            skills,
            projects,
            experiences,
            education,
            certifications,
            achievements,
            blog_posts,
        })
    }
}
