//! Repository for the `blog_posts` table.

use folio_core::blog::{STATUS_DRAFT, STATUS_PUBLISHED};
use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::blog_post::{BlogPost, BlogPostWithAuthor, CreateBlogPost};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, content, excerpt, image, author_id, status, tags, \
    created_at, updated_at, published_at";

/// Provides access to blog posts and their authors.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post, returning the created row.
    ///
    /// Status defaults to `draft`. A post created as `published` without a
    /// `published_at` is stamped with the current time.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &CreateBlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or(STATUS_DRAFT);
        let query = format!(
            "INSERT INTO blog_posts
                (title, slug, content, excerpt, image, author_id, status, tags, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
                     CASE WHEN $7 = '{STATUS_PUBLISHED}' THEN COALESCE($9, NOW()) ELSE $9 END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.image)
            .bind(input.author_id)
            .bind(status)
            .bind(&input.tags)
            .bind(input.published_at)
            .fetch_one(executor)
            .await
    }

    /// List published posts, most recently published first.
    ///
    /// Drafts are never returned. `limit` caps the number of rows when set.
    pub async fn list_published(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE status = '{STATUS_PUBLISHED}'
             ORDER BY published_at DESC NULLS LAST, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List published posts with their authors embedded.
    pub async fn list_published_with_author(
        pool: &PgPool,
        limit: Option<i64>,
    ) -> Result<Vec<BlogPostWithAuthor>, sqlx::Error> {
        let posts = Self::list_published(pool, limit).await?;
        let author_ids: Vec<DbId> = posts.iter().map(|p| p.author_id).collect();
        let authors = UserRepo::find_by_ids(pool, &author_ids).await?;

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = authors.get(&post.author_id).cloned();
                BlogPostWithAuthor { post, author }
            })
            .collect())
    }
}
