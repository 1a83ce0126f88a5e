//! Admin post service - the list/create/show/update/delete orchestration.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{CurrentUser, Post, Tag};
use crate::error::{DomainError, FieldViolation};
use crate::ports::{BlobStore, PostRepository, TagRepository};
use crate::slug::{numbered_candidate, slugify_title};

use super::validation::{looks_like_image, require_min_length};

/// Directory prefix cover images are stored under.
const COVER_DIRECTORY: &str = "post_covers";

/// An uploaded cover image payload.
#[derive(Debug, Clone)]
pub struct CoverImageUpload {
    pub file_name: String,
    pub data: Bytes,
}

/// Input for creating a post. The cover image is required; tags are
/// attached only when a non-empty list is supplied.
#[derive(Debug, Clone)]
pub struct NewPostInput {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<Uuid>,
    pub cover_image: Option<CoverImageUpload>,
}

/// Input for updating a post. Title and content must be resent in full even
/// when unchanged. The cover image is optional; supplying one replaces (and
/// deletes) the old blob. The tag set replaces all prior associations, and
/// an absent set clears them - update is absolute for tags, unlike create.
#[derive(Debug, Clone)]
pub struct UpdatePostInput {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<Uuid>,
    pub cover_image: Option<CoverImageUpload>,
}

/// Post admin service - the CRUD operations plus slug generation, built on
/// the repository and blob-store ports.
pub struct PostAdminService {
    posts: Arc<dyn PostRepository>,
    tags: Arc<dyn TagRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl PostAdminService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        tags: Arc<dyn TagRepository>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        Self { posts, tags, blobs }
    }

    /// List posts visible to the caller: admins see every post ordered by
    /// creation time descending, authors only their own.
    pub async fn list(&self, user: &CurrentUser) -> Result<Vec<Post>, DomainError> {
        let posts = if user.is_admin() {
            self.posts.list_all().await?
        } else {
            self.posts.list_by_owner(user.id).await?
        };

        Ok(posts)
    }

    /// All tags available for association (create and edit forms).
    pub async fn available_tags(&self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.all().await?)
    }

    /// Resolve a post by exact slug match.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        self.posts
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::PostNotFound {
                slug: slug.to_string(),
            })
    }

    /// Tags currently attached to the post.
    pub async fn tags_for(&self, post: &Post) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.tags_for_post(post.id).await?)
    }

    /// Create a post owned by the caller.
    ///
    /// Every field violation is collected before failing, and nothing is
    /// written until validation has fully passed. The cover blob is stored
    /// first; a post-record failure after that leaves the blob orphaned.
    pub async fn create(
        &self,
        user: &CurrentUser,
        input: NewPostInput,
    ) -> Result<Post, DomainError> {
        let mut violations = Vec::new();
        require_min_length(&mut violations, "title", &input.title);
        require_min_length(&mut violations, "content", &input.content);
        let base_slug = slugify_title(&input.title);
        if base_slug.is_empty() {
            violations.push(FieldViolation::new(
                "title",
                "cannot be reduced to a URL slug",
            ));
        }
        self.check_tags_exist(&mut violations, &input.tag_ids).await?;

        let upload = match input.cover_image {
            Some(upload) => {
                if !looks_like_image(&upload.data) {
                    violations.push(FieldViolation::new("cover_image", "must be an image"));
                }
                Some(upload)
            }
            None => {
                violations.push(FieldViolation::new("cover_image", "is required"));
                None
            }
        };

        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }

        let slug = self.generate_slug(&base_slug).await?;

        let mut cover_reference = None;
        if let Some(upload) = upload {
            let reference = self
                .blobs
                .put(COVER_DIRECTORY, &upload.file_name, upload.data)
                .await?;
            cover_reference = Some(reference);
        }

        let post = Post::new(user.id, input.title, input.content, slug, cover_reference);
        let post = self.posts.save(post).await?;

        if !input.tag_ids.is_empty() {
            self.tags.attach(post.id, &input.tag_ids).await?;
        }

        Ok(post)
    }

    /// Update the post addressed by `slug`.
    pub async fn update(&self, slug: &str, input: UpdatePostInput) -> Result<Post, DomainError> {
        let mut violations = Vec::new();
        require_min_length(&mut violations, "title", &input.title);
        require_min_length(&mut violations, "content", &input.content);
        let base_slug = slugify_title(&input.title);
        if base_slug.is_empty() {
            violations.push(FieldViolation::new(
                "title",
                "cannot be reduced to a URL slug",
            ));
        }
        self.check_tags_exist(&mut violations, &input.tag_ids).await?;

        if let Some(upload) = &input.cover_image {
            if !looks_like_image(&upload.data) {
                violations.push(FieldViolation::new("cover_image", "must be an image"));
            }
        }

        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }

        let mut post = self.find_by_slug(slug).await?;

        // A replacement cover deletes the old blob first; the old blob is
        // never deleted on its own.
        if let Some(upload) = input.cover_image {
            if let Some(old_reference) = post.cover_image.take() {
                self.blobs.delete(&old_reference).await?;
            }
            let reference = self
                .blobs
                .put(COVER_DIRECTORY, &upload.file_name, upload.data)
                .await?;
            post.cover_image = Some(reference);
        }

        // Compared against the pre-update stored title, so resending the
        // same title does not churn the slug.
        if input.title != post.title {
            post.slug = self.generate_slug(&base_slug).await?;
        }

        self.tags.sync(post.id, &input.tag_ids).await?;

        post.title = input.title;
        post.content = input.content;
        post.updated_at = Utc::now();

        let post = self.posts.save(post).await?;

        Ok(post)
    }

    /// Delete the post addressed by `slug`, detaching all tag associations
    /// first so no join rows are orphaned. The cover blob stays in storage.
    pub async fn delete(&self, slug: &str) -> Result<(), DomainError> {
        let post = self.find_by_slug(slug).await?;

        self.tags.detach_all(post.id).await?;
        self.posts.delete(post.id).await?;

        Ok(())
    }

    /// Produce a slug unique among existing posts at the moment of
    /// generation, from an already-validated non-empty base. The base is
    /// tried bare first; collisions retry with `-1`, `-2`, ... until an
    /// unused candidate is found. The uniqueness check and the later insert
    /// are not atomic; the repository's slug constraint is the backstop for
    /// that race.
    async fn generate_slug(&self, base: &str) -> Result<String, DomainError> {
        let mut attempt: u32 = 0;
        loop {
            let candidate = numbered_candidate(base, attempt);
            if !self.posts.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            attempt += 1;
        }
    }

    async fn check_tags_exist(
        &self,
        violations: &mut Vec<FieldViolation>,
        tag_ids: &[Uuid],
    ) -> Result<(), DomainError> {
        for id in tag_ids {
            if !self.tags.exists(*id).await? {
                violations.push(FieldViolation::new("tags", format!("unknown tag: {id}")));
            }
        }

        Ok(())
    }
}
