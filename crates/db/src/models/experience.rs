//! Work experience model and its skills-used view.

use folio_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::skill::Skill;

/// A row from the `experiences` table.
///
/// When `current` is true, `end_date` is ignored by the front-end.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub current: bool,
    pub description: String,
}

/// An experience with the skills applied in it.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceWithSkills {
    #[serde(flatten)]
    pub experience: Experience,
    pub skills_used: Vec<Skill>,
}

/// DTO for creating an experience.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub current: Option<bool>,
    pub description: String,
    /// Skill ids linked through `experience_skills`.
    #[serde(default)]
    pub skill_ids: Vec<DbId>,
}
