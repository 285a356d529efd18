//! Repository for the `certifications` table.

use sqlx::{PgExecutor, PgPool};

use crate::models::certification::{Certification, CreateCertification};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, issuer, issue_date, expiry_date, credential_id, \
    credential_url, image, description";

/// Provides access to certification rows.
pub struct CertificationRepo;

impl CertificationRepo {
    /// Insert a new certification, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateCertification,
    ) -> Result<Certification, sqlx::Error> {
        let query = format!(
            "INSERT INTO certifications
                (name, issuer, issue_date, expiry_date, credential_id, credential_url,
                 image, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(&input.name)
            .bind(&input.issuer)
            .bind(input.issue_date)
            .bind(input.expiry_date)
            .bind(&input.credential_id)
            .bind(&input.credential_url)
            .bind(&input.image)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// List certifications, most recently issued first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Certification>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM certifications ORDER BY issue_date DESC, id DESC");
        sqlx::query_as::<_, Certification>(&query)
            .fetch_all(pool)
            .await
    }
}
