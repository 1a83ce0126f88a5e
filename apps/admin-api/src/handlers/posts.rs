//! Admin post handlers - the seven controller operations.

use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_web::{HttpResponse, web};
use bytes::Bytes;
use uuid::Uuid;

use pressroom_core::services::{CoverImageUpload, NewPostInput, UpdatePostInput};
use pressroom_shared::ApiResponse;
use pressroom_shared::dto::{
    CreateFormResponse, EditFormResponse, PostDetailResponse, PostResponse, TagResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart form shared by store and update. The cover image being
/// required on create is enforced by domain validation, not here, so both
/// paths report it through the same 422 shape.
#[derive(Debug, MultipartForm)]
pub struct PostForm {
    pub title: Text<String>,
    pub content: Text<String>,
    #[multipart(rename = "tags[]")]
    pub tags: Vec<Text<Uuid>>,
    pub cover_image: Option<TempFile>,
}

impl PostForm {
    fn tag_ids(&self) -> Vec<Uuid> {
        self.tags.iter().map(|tag| tag.0).collect()
    }
}

async fn read_cover(file: TempFile) -> AppResult<CoverImageUpload> {
    let file_name = file
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_string());
    let data = tokio::fs::read(file.file.path())
        .await
        .map_err(|err| AppError::Internal(format!("failed to read upload: {err}")))?;

    Ok(CoverImageUpload {
        file_name,
        data: Bytes::from(data),
    })
}

fn detail_location(slug: &str) -> String {
    format!("/api/admin/posts/{slug}")
}

/// GET /api/admin/posts
pub async fn index(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let posts = state.service.list(&identity.user).await?;
    let posts: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/admin/posts/new
pub async fn create(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    let available_tags = state
        .service
        .available_tags()
        .await?
        .into_iter()
        .map(TagResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(CreateFormResponse { available_tags })))
}

/// POST /api/admin/posts
pub async fn store(
    state: web::Data<AppState>,
    identity: Identity,
    form: MultipartForm<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let tag_ids = form.tag_ids();

    let cover_image = match form.cover_image {
        Some(file) => Some(read_cover(file).await?),
        None => None,
    };

    let input = NewPostInput {
        title: form.title.0,
        content: form.content.0,
        tag_ids,
        cover_image,
    };

    let post = state.service.create(&identity.user, input).await?;
    let location = detail_location(&post.slug);

    Ok(HttpResponse::Created()
        .insert_header(("Location", location))
        .json(ApiResponse::ok(PostResponse::from(post))))
}

/// GET /api/admin/posts/{slug}
pub async fn show(
    state: web::Data<AppState>,
    _identity: Identity,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.service.find_by_slug(&slug).await?;
    let tags = state
        .service
        .tags_for(&post)
        .await?
        .into_iter()
        .map(TagResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostDetailResponse {
        post: PostResponse::from(post),
        tags,
    })))
}

/// GET /api/admin/posts/{slug}/edit
pub async fn edit(
    state: web::Data<AppState>,
    _identity: Identity,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.service.find_by_slug(&slug).await?;
    let tags = state
        .service
        .tags_for(&post)
        .await?
        .into_iter()
        .map(TagResponse::from)
        .collect();
    let available_tags = state
        .service
        .available_tags()
        .await?
        .into_iter()
        .map(TagResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(EditFormResponse {
        post: PostResponse::from(post),
        tags,
        available_tags,
    })))
}

/// PUT /api/admin/posts/{slug}
pub async fn update(
    state: web::Data<AppState>,
    _identity: Identity,
    slug: web::Path<String>,
    form: MultipartForm<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let tag_ids = form.tag_ids();

    let cover_image = match form.cover_image {
        Some(file) => Some(read_cover(file).await?),
        None => None,
    };

    let input = UpdatePostInput {
        title: form.title.0,
        content: form.content.0,
        tag_ids,
        cover_image,
    };

    let post = state.service.update(&slug, input).await?;
    // The slug may have changed with the title; point at the new detail view.
    let location = detail_location(&post.slug);

    Ok(HttpResponse::Ok()
        .insert_header(("Location", location))
        .json(ApiResponse::ok(PostResponse::from(post))))
}

/// DELETE /api/admin/posts/{slug}
pub async fn destroy(
    state: web::Data<AppState>,
    _identity: Identity,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.service.delete(&slug).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("Location", "/api/admin/posts"))
        .json(ApiResponse::ok_with_message((), "Post deleted")))
}
