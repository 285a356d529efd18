//! Repository for the `skills` table and its two join tables
//! (`project_skills`, `experience_skills`).

use std::collections::HashMap;

use folio_core::skills::SkillType;
use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::skill::{group_by_owner, CreateSkill, GroupedSkills, LinkedSkill, Skill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, skill_type, proficiency, description, icon";

/// Column list for `skills` when joined under the alias `s`.
const JOINED_COLUMNS: &str = "s.id, s.name, s.skill_type, s.proficiency, s.description, s.icon";

/// Provides access to skills and their project/experience associations.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    ///
    /// If `proficiency` is `None` in the input, defaults to 0.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateSkill,
    ) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, skill_type, proficiency, description, icon)
             VALUES ($1, $2, COALESCE($3, 0), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.skill_type)
            .bind(input.proficiency)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(executor)
            .await
    }

    /// Count all skills.
    pub async fn count<'e, E: PgExecutor<'e>>(executor: E) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skills")
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// List every skill in store order (by id), unfiltered.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY id");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// List skills ranked by proficiency (highest first), then by name.
    ///
    /// When `skill_type` is `Some`, only rows whose `skill_type` matches it
    /// exactly are returned. An unknown type yields an empty list.
    pub async fn list_ranked(
        pool: &PgPool,
        skill_type: Option<&str>,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        match skill_type {
            Some(skill_type) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM skills
                     WHERE skill_type = $1
                     ORDER BY proficiency DESC, name COLLATE \"C\" ASC, id DESC"
                );
                sqlx::query_as::<_, Skill>(&query)
                    .bind(skill_type)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM skills
                     ORDER BY proficiency DESC, name COLLATE \"C\" ASC, id DESC"
                );
                sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
            }
        }
    }

    /// All skills split into the four categories, each in store order.
    pub async fn grouped(pool: &PgPool) -> Result<GroupedSkills, sqlx::Error> {
        let mut grouped = GroupedSkills::default();
        for skill in Self::list(pool).await? {
            match SkillType::parse(&skill.skill_type) {
                Some(SkillType::Tech) => grouped.technical.push(skill),
                Some(SkillType::Soft) => grouped.soft_skills.push(skill),
                Some(SkillType::Tool) => grouped.tools.push(skill),
                Some(SkillType::Lang) => grouped.languages.push(skill),
                None => {
                    tracing::warn!(skill_id = skill.id, skill_type = %skill.skill_type, "Skill with unknown type left out of groups");
                }
            }
        }
        Ok(grouped)
    }

    // -----------------------------------------------------------------------
    // Join-table helpers
    // -----------------------------------------------------------------------

    /// Skills linked to each of the given projects, keyed by project id.
    pub async fn for_projects(
        pool: &PgPool,
        project_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<Skill>>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT ps.project_id AS owner_id, {JOINED_COLUMNS}
             FROM project_skills ps
             JOIN skills s ON s.id = ps.skill_id
             WHERE ps.project_id = ANY($1)
             ORDER BY ps.project_id, s.id"
        );
        let links = sqlx::query_as::<_, LinkedSkill>(&query)
            .bind(project_ids)
            .fetch_all(pool)
            .await?;
        Ok(group_by_owner(links))
    }

    /// Skills linked to each of the given experiences, keyed by experience id.
    pub async fn for_experiences(
        pool: &PgPool,
        experience_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<Skill>>, sqlx::Error> {
        if experience_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT es.experience_id AS owner_id, {JOINED_COLUMNS}
             FROM experience_skills es
             JOIN skills s ON s.id = es.skill_id
             WHERE es.experience_id = ANY($1)
             ORDER BY es.experience_id, s.id"
        );
        let links = sqlx::query_as::<_, LinkedSkill>(&query)
            .bind(experience_ids)
            .fetch_all(pool)
            .await?;
        Ok(group_by_owner(links))
    }

    /// Link a skill to a project (idempotent).
    pub async fn link_project<'e, E: PgExecutor<'e>>(
        executor: E,
        project_id: DbId,
        skill_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_skills (project_id, skill_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(skill_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    /// Link a skill to an experience (idempotent).
    pub async fn link_experience<'e, E: PgExecutor<'e>>(
        executor: E,
        experience_id: DbId,
        skill_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO experience_skills (experience_id, skill_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(experience_id)
        .bind(skill_id)
        .execute(executor)
        .await?;
        Ok(())
    }
}
