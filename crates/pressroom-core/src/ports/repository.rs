use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, Tag};
use crate::error::RepoError;

/// Post repository - persistence and slug uniqueness queries.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by exact slug match.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Check whether any post already holds the given slug.
    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError>;

    /// All posts, ordered by creation time descending.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts owned by the given user, in repository default order.
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Save a post (create or update).
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by its id.
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}

/// Tag repository - existence checks and post/tag association management.
///
/// Tag administration itself (creating and renaming tags) happens elsewhere;
/// post operations only read tags and manage the join rows.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Check whether a tag with the given id exists.
    async fn exists(&self, id: Uuid) -> Result<bool, RepoError>;

    /// All known tags.
    async fn all(&self) -> Result<Vec<Tag>, RepoError>;

    /// Tags currently associated with the given post.
    async fn tags_for_post(&self, post_id: Uuid) -> Result<Vec<Tag>, RepoError>;

    /// Add associations for the given tags, keeping existing ones.
    async fn attach(&self, post_id: Uuid, tag_ids: &[Uuid]) -> Result<(), RepoError>;

    /// Replace all associations of the post with exactly the given set.
    async fn sync(&self, post_id: Uuid, tag_ids: &[Uuid]) -> Result<(), RepoError>;

    /// Remove every association of the post.
    async fn detach_all(&self, post_id: Uuid) -> Result<(), RepoError>;
}
