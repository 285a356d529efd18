//! Owner profile model.

use folio_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::user::User;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub birth_date: Option<Date>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

/// A profile with its owning user embedded (`null` if the user row is gone).
#[derive(Debug, Clone, Serialize)]
pub struct ProfileWithUser {
    #[serde(flatten)]
    pub profile: Profile,
    pub user: Option<User>,
}

/// DTO for creating a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub user_id: DbId,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub birth_date: Option<Date>,
    pub website: Option<String>,
    pub phone: Option<String>,
}
