//! In-memory repository implementations - used in tests and when no
//! database backend is configured. Data is lost on process restart.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use pressroom_core::domain::{Post, Tag};
use pressroom_core::error::RepoError;
use pressroom_core::ports::{PostRepository, TagRepository};

/// In-memory post repository using a HashMap behind an async RwLock.
///
/// `save` rejects a slug already held by a different post, standing in for
/// the unique index a database backend would enforce.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().find(|post| post.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().any(|post| post.slug == slug))
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let mut owned: Vec<Post> = posts
            .values()
            .filter(|post| post.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(owned)
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        let duplicate = posts
            .values()
            .any(|other| other.slug == post.slug && other.id != post.id);
        if duplicate {
            return Err(RepoError::Constraint(format!(
                "duplicate slug: {}",
                post.slug
            )));
        }

        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

/// In-memory tag repository holding the tag records and the post/tag join
/// rows.
#[derive(Default)]
pub struct InMemoryTagRepository {
    tags: RwLock<HashMap<Uuid, Tag>>,
    links: RwLock<HashMap<Uuid, BTreeSet<Uuid>>>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the repository with the given tags. Tag administration
    /// sits outside the post admin surface, so startup seeding and test
    /// fixtures go through here.
    pub fn with_tags(tags: Vec<Tag>) -> Self {
        Self {
            tags: RwLock::new(tags.into_iter().map(|tag| (tag.id, tag)).collect()),
            links: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn exists(&self, id: Uuid) -> Result<bool, RepoError> {
        Ok(self.tags.read().await.contains_key(&id))
    }

    async fn all(&self) -> Result<Vec<Tag>, RepoError> {
        let tags = self.tags.read().await;
        let mut all: Vec<Tag> = tags.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn tags_for_post(&self, post_id: Uuid) -> Result<Vec<Tag>, RepoError> {
        let links = self.links.read().await;
        let tags = self.tags.read().await;

        let mut attached: Vec<Tag> = links
            .get(&post_id)
            .map(|ids| ids.iter().filter_map(|id| tags.get(id).cloned()).collect())
            .unwrap_or_default();
        attached.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(attached)
    }

    async fn attach(&self, post_id: Uuid, tag_ids: &[Uuid]) -> Result<(), RepoError> {
        let mut links = self.links.write().await;
        links
            .entry(post_id)
            .or_default()
            .extend(tag_ids.iter().copied());
        Ok(())
    }

    async fn sync(&self, post_id: Uuid, tag_ids: &[Uuid]) -> Result<(), RepoError> {
        let mut links = self.links.write().await;
        if tag_ids.is_empty() {
            links.remove(&post_id);
        } else {
            links.insert(post_id, tag_ids.iter().copied().collect());
        }
        Ok(())
    }

    async fn detach_all(&self, post_id: Uuid) -> Result<(), RepoError> {
        let mut links = self.links.write().await;
        links.remove(&post_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_slug(slug: &str) -> Post {
        Post::new(
            Uuid::new_v4(),
            "A title long enough".to_string(),
            "Content long enough".to_string(),
            slug.to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn save_rejects_duplicate_slug() {
        let repo = InMemoryPostRepository::new();
        repo.save(post_with_slug("taken")).await.unwrap();

        let err = repo.save(post_with_slug("taken")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn save_allows_resaving_same_post() {
        let repo = InMemoryPostRepository::new();
        let mut post = repo.save(post_with_slug("mine")).await.unwrap();

        post.content = "Updated content here".to_string();
        repo.save(post).await.unwrap();
    }

    #[tokio::test]
    async fn list_all_orders_by_creation_desc() {
        let repo = InMemoryPostRepository::new();
        let mut first = post_with_slug("first");
        let mut second = post_with_slug("second");
        first.created_at = chrono::Utc::now() - chrono::Duration::seconds(60);
        second.created_at = chrono::Utc::now();
        repo.save(first).await.unwrap();
        repo.save(second).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all[0].slug, "second");
        assert_eq!(all[1].slug, "first");
    }

    #[tokio::test]
    async fn sync_with_empty_set_clears_links() {
        let tag = Tag::new("rust");
        let repo = InMemoryTagRepository::with_tags(vec![tag.clone()]);
        let post_id = Uuid::new_v4();

        repo.attach(post_id, &[tag.id]).await.unwrap();
        assert_eq!(repo.tags_for_post(post_id).await.unwrap().len(), 1);

        repo.sync(post_id, &[]).await.unwrap();
        assert!(repo.tags_for_post(post_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn attach_keeps_existing_links() {
        let first = Tag::new("rust");
        let second = Tag::new("web");
        let repo = InMemoryTagRepository::with_tags(vec![first.clone(), second.clone()]);
        let post_id = Uuid::new_v4();

        repo.attach(post_id, &[first.id]).await.unwrap();
        repo.attach(post_id, &[second.id]).await.unwrap();

        assert_eq!(repo.tags_for_post(post_id).await.unwrap().len(), 2);
    }
}
