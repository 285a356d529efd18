//! Repository for the `education` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::education::{CreateEducation, Education};

/// Column list shared across queries. `gpa` is cast so it decodes as `f64`.
const COLUMNS: &str = "id, degree, institution, field_of_study, start_date, end_date, \
    current, description, gpa::float8 AS gpa";

/// Provides access to education rows.
pub struct EducationRepo;

impl EducationRepo {
    /// Insert a new education entry, returning the created row.
    ///
    /// `gpa` is rounded to two decimal places by the `NUMERIC(3,2)` column.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateEducation,
    ) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO education
                (degree, institution, field_of_study, start_date, end_date, current,
                 description, gpa)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false), $7, CAST($8 AS NUMERIC(3, 2)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.degree)
            .bind(&input.institution)
            .bind(&input.field_of_study)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.current)
            .bind(&input.description)
            .bind(input.gpa)
            .fetch_one(executor)
            .await
    }

    /// List education entries, most recently started first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY start_date DESC, id DESC");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }
}
