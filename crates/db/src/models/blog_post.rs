//! Blog post model and its author view.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::user::User;

/// A row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    #[serde(skip_serializing)]
    pub author_id: DbId,
    pub status: String,
    pub tags: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub published_at: Option<Timestamp>,
}

/// A post with its author embedded (`null` if the user row is gone).
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostWithAuthor {
    #[serde(flatten)]
    pub post: BlogPost,
    pub author: Option<User>,
}

/// DTO for creating a blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub author_id: DbId,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
    pub tags: Option<String>,
    /// Set to now when a post is created as published without a timestamp.
    pub published_at: Option<Timestamp>,
}
