//! Repository for the `profiles` table.

use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::profile::{CreateProfile, Profile, ProfileWithUser};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, avatar, bio, location, birth_date, website, phone";

/// Provides access to profile rows and their owning users.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    ///
    /// Fails with a `uq_profiles_user_id` violation if the user already has one.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, avatar, bio, location, birth_date, website, phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.user_id)
            .bind(&input.avatar)
            .bind(&input.bio)
            .bind(&input.location)
            .bind(input.birth_date)
            .bind(&input.website)
            .bind(&input.phone)
            .fetch_one(executor)
            .await
    }

    /// List all profiles in store order (by id).
    pub async fn list(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles ORDER BY id");
        sqlx::query_as::<_, Profile>(&query).fetch_all(pool).await
    }

    /// List all profiles, each with its user embedded.
    pub async fn list_with_user(pool: &PgPool) -> Result<Vec<ProfileWithUser>, sqlx::Error> {
        let profiles = Self::list(pool).await?;
        Self::attach_users(pool, profiles).await
    }

    /// The first profile by id with its user embedded, or `None` if the
    /// table is empty.
    pub async fn first_with_user(pool: &PgPool) -> Result<Option<ProfileWithUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles ORDER BY id LIMIT 1");
        let profile = sqlx::query_as::<_, Profile>(&query)
            .fetch_optional(pool)
            .await?;

        match profile {
            Some(profile) => Ok(Self::attach_users(pool, vec![profile]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Embed each profile's user, fetched in a single batched query.
    async fn attach_users(
        pool: &PgPool,
        profiles: Vec<Profile>,
    ) -> Result<Vec<ProfileWithUser>, sqlx::Error> {
        let user_ids: Vec<DbId> = profiles.iter().map(|p| p.user_id).collect();
        let users = UserRepo::find_by_ids(pool, &user_ids).await?;

        Ok(profiles
            .into_iter()
            .map(|profile| {
                let user = users.get(&profile.user_id).cloned();
                ProfileWithUser { profile, user }
            })
            .collect())
    }
}
