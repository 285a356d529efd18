//! Project model and its technologies view.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::skill::Skill;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with the skills it was built with.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTechnologies {
    #[serde(flatten)]
    pub project: Project,
    pub technologies: Vec<Skill>,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    /// Defaults to `false` if omitted.
    pub featured: Option<bool>,
    /// Skill ids linked through `project_skills`.
    #[serde(default)]
    pub skill_ids: Vec<DbId>,
}
