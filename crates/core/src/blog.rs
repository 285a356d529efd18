//! Blog post publication states.

/// A post that is still being written. Never exposed by list endpoints.
pub const STATUS_DRAFT: &str = "draft";

/// A post visible to visitors.
pub const STATUS_PUBLISHED: &str = "published";

/// Number of posts embedded in the aggregate portfolio response.
pub const AGGREGATE_POST_LIMIT: i64 = 10;
