//! Data Transfer Objects - response types for the admin API.

use serde::{Deserialize, Serialize};

use pressroom_core::domain::{Post, Tag};

/// A post as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub cover_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            title: post.title,
            content: post.content,
            slug: post.slug,
            cover_image: post.cover_image,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

/// A tag as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name,
        }
    }
}

/// Detail view of a post with its attached tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub tags: Vec<TagResponse>,
}

/// Payload backing the create form: the tags available for association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFormResponse {
    pub available_tags: Vec<TagResponse>,
}

/// Payload backing the edit form: the post, its attached tags, and every
/// tag available for association.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditFormResponse {
    pub post: PostResponse,
    pub tags: Vec<TagResponse>,
    pub available_tags: Vec<TagResponse>,
}
