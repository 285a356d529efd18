//! Repository for the `contacts` table.

use folio_core::contact::ContactSubmission;
use sqlx::PgPool;

use crate::models::contact::Contact;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, subject, message, created_at, read";

/// Provides access to visitor contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a validated submission as an unread message.
    ///
    /// The insert runs in its own transaction; if it fails the transaction is
    /// dropped uncommitted and no row is left behind.
    pub async fn create(
        pool: &PgPool,
        input: &ContactSubmission,
    ) -> Result<Contact, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO contacts (name, email, subject, message, read)
             VALUES ($1, $2, $3, $4, false)
             RETURNING {COLUMNS}"
        );
        let contact = sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.subject)
            .bind(&input.message)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(contact)
    }

    /// List all messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Count all stored messages.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
