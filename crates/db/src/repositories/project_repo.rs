//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::project::{CreateProject, Project, ProjectWithTechnologies};
use crate::repositories::SkillRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, image, url, github_url, featured, created_at, updated_at";

/// Provides access to projects and their technologies.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and its skill links in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let project = Self::create_in(&mut tx, input).await?;
        tx.commit().await?;
        Ok(project)
    }

    /// Insert a new project and its skill links within an existing transaction.
    pub async fn create_in(
        tx: &mut Transaction<'_, Postgres>,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, image, url, github_url, featured)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, false))
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.url)
            .bind(&input.github_url)
            .bind(input.featured)
            .fetch_one(&mut **tx)
            .await?;

        for &skill_id in &input.skill_ids {
            SkillRepo::link_project(&mut **tx, project.id, skill_id).await?;
        }

        Ok(project)
    }

    /// List projects, newest first.
    ///
    /// When `featured` is `Some`, only rows with that `featured` value are
    /// returned.
    pub async fn list(pool: &PgPool, featured: Option<bool>) -> Result<Vec<Project>, sqlx::Error> {
        match featured {
            Some(featured) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects
                     WHERE featured = $1
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(featured)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
                sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
            }
        }
    }

    /// List projects with their technologies embedded.
    pub async fn list_with_technologies(
        pool: &PgPool,
        featured: Option<bool>,
    ) -> Result<Vec<ProjectWithTechnologies>, sqlx::Error> {
        let projects = Self::list(pool, featured).await?;
        let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
        let mut technologies = SkillRepo::for_projects(pool, &ids).await?;

        Ok(projects
            .into_iter()
            .map(|project| {
                let technologies = technologies.remove(&project.id).unwrap_or_default();
                ProjectWithTechnologies {
                    project,
                    technologies,
                }
            })
            .collect())
    }

    /// Set a project's `featured` flag. `updated_at` is refreshed by trigger.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        featured: bool,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET featured = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(featured)
            .fetch_optional(pool)
            .await
    }
}
