//! Skill model, the grouped-skills view, and join-row helpers.

use std::collections::HashMap;

use folio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub skill_type: String,
    pub proficiency: i32,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// A skill joined through `project_skills` or `experience_skills`, tagged
/// with the id of the row that owns the association.
#[derive(Debug, Clone, FromRow)]
pub struct LinkedSkill {
    pub owner_id: DbId,
    #[sqlx(flatten)]
    pub skill: Skill,
}

/// Skills split into the four categories.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedSkills {
    pub technical: Vec<Skill>,
    pub soft_skills: Vec<Skill>,
    pub tools: Vec<Skill>,
    pub languages: Vec<Skill>,
}

/// DTO for creating a skill.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub skill_type: String,
    /// Defaults to 0 if omitted.
    pub proficiency: Option<i32>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Bucket linked skills by owner id, preserving query order within a bucket.
pub fn group_by_owner(links: Vec<LinkedSkill>) -> HashMap<DbId, Vec<Skill>> {
    let mut grouped: HashMap<DbId, Vec<Skill>> = HashMap::new();
    for link in links {
        grouped.entry(link.owner_id).or_default().push(link.skill);
    }
    grouped
}
