//! Repository for the `achievements` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::achievement::{Achievement, CreateAchievement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, achievement_type, date, organization, url, image";

/// Provides access to achievement rows.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Insert a new achievement, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateAchievement,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements
                (title, description, achievement_type, date, organization, url, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.achievement_type)
            .bind(input.date)
            .bind(&input.organization)
            .bind(&input.url)
            .bind(&input.image)
            .fetch_one(executor)
            .await
    }

    /// List achievements, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM achievements ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Achievement>(&query)
            .fetch_all(pool)
            .await
    }
}
