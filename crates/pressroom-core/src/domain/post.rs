use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - an admin-managed blog post.
///
/// The slug is derived from the title, unique across all posts, and
/// regenerated whenever the title changes. Tag associations live in the
/// tag repository; the post record itself does not carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user_id` with an already-unique slug.
    pub fn new(
        user_id: Uuid,
        title: String,
        content: String,
        slug: String,
        cover_image: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            slug,
            cover_image,
            created_at: now,
            updated_at: now,
        }
    }
}
