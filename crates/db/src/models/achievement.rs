//! Achievement model (awards, competitions, publications).

use folio_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Free-form tag such as `award` or `publication`.
    pub achievement_type: Option<String>,
    pub date: Date,
    pub organization: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

/// DTO for creating an achievement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAchievement {
    pub title: String,
    pub description: String,
    pub achievement_type: Option<String>,
    pub date: Date,
    pub organization: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}
