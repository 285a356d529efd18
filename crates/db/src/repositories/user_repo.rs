//! Repository for the `users` table.

use std::collections::HashMap;

use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, first_name, last_name, created_at";

/// Provides access to user rows.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateUser,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, first_name, last_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(executor)
            .await
    }

    /// The first user by id, if any.
    pub async fn first<'e, E: PgExecutor<'e>>(executor: E) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id LIMIT 1");
        sqlx::query_as::<_, User>(&query)
            .fetch_optional(executor)
            .await
    }

    /// Load every user whose id is in `ids`, keyed by id.
    ///
    /// Ids with no matching row are simply absent from the map.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<HashMap<DbId, User>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ANY($1)");
        let users = sqlx::query_as::<_, User>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(users.into_iter().map(|u| (u.id, u)).collect())
    }
}
