//! Repository for the `experiences` table.

use folio_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::experience::{CreateExperience, Experience, ExperienceWithSkills};
use crate::repositories::SkillRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, company, location, start_date, end_date, current, description";

/// Provides access to work experiences and the skills used in them.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new experience and its skill links in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let experience = Self::create_in(&mut tx, input).await?;
        tx.commit().await?;
        Ok(experience)
    }

    /// Insert a new experience and its skill links within an existing transaction.
    pub async fn create_in(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences
                (title, company, location, start_date, end_date, current, description)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false), $7)
             RETURNING {COLUMNS}"
        );
        let experience = sqlx::query_as::<_, Experience>(&query)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.current)
            .bind(&input.description)
            .fetch_one(&mut **tx)
            .await?;

        for &skill_id in &input.skill_ids {
            SkillRepo::link_experience(&mut **tx, experience.id, skill_id).await?;
        }

        Ok(experience)
    }

    /// List experiences, most recently started first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM experiences ORDER BY start_date DESC, id DESC");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// List experiences with the skills used in each embedded.
    pub async fn list_with_skills(
        pool: &PgPool,
    ) -> Result<Vec<ExperienceWithSkills>, sqlx::Error> {
        let experiences = Self::list(pool).await?;
        let ids: Vec<DbId> = experiences.iter().map(|e| e.id).collect();
        let mut skills = SkillRepo::for_experiences(pool, &ids).await?;

        Ok(experiences
            .into_iter()
            .map(|experience| {
                let skills_used = skills.remove(&experience.id).unwrap_or_default();
                ExperienceWithSkills {
                    experience,
                    skills_used,
                }
            })
            .collect())
    }
}
