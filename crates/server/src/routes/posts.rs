//! Blog post route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use vetaris_core::PostId;

use crate::db::posts::PostRepository;
use crate::error::{ApiError, ApiJson, Result};
use crate::middleware::auth::RequireAdmin;
use crate::models::BlogPost;
use crate::models::post::{NewPost, PostKey, PostPatch};
use crate::state::AppState;

/// List published posts, newest first.
///
/// GET /api/posts
///
/// # Errors
///
/// 500 if the query fails.
pub async fn list_published(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>> {
    let posts = PostRepository::new(state.pool()).list(false).await?;

    Ok(Json(posts))
}

/// List all posts including drafts, newest first.
///
/// GET /api/admin/posts
///
/// # Errors
///
/// 401 without a session, 403 without the admin flag.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogPost>>> {
    let posts = PostRepository::new(state.pool()).list(true).await?;

    Ok(Json(posts))
}

/// Get a single published post by numeric id or slug.
///
/// GET /api/posts/{id_or_slug}
///
/// The segment's shape selects the lookup: all-digit segments resolve by
/// id, everything else by slug. Drafts are invisible here, so an
/// unpublished post 404s just like a missing one.
///
/// # Errors
///
/// 404 for unknown keys and drafts.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> Result<Json<BlogPost>> {
    let key = PostKey::parse(&id_or_slug);

    let post = PostRepository::new(state.pool())
        .get_by_key(&key)
        .await?
        .filter(|post| post.is_published)
        .ok_or(ApiError::NotFound("post"))?;

    Ok(Json(post))
}

/// Create a post; the slug is derived from the title.
///
/// POST /api/posts
///
/// # Errors
///
/// 400 for an empty title, 409 when the derived slug is already taken.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewPost>,
) -> Result<impl IntoResponse> {
    if body.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_owned()));
    }

    let post = PostRepository::new(state.pool()).create(body).await?;

    tracing::info!(post_id = %post.id, slug = %post.slug, "post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// Apply a partial update to a post.
///
/// PUT /api/posts/{id}
///
/// The slug never changes, even when the title does.
///
/// # Errors
///
/// 400 for a non-numeric id or unknown fields, 404 for an unknown post.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
    ApiJson(patch): ApiJson<PostPatch>,
) -> Result<Json<BlogPost>> {
    let id = numeric_id(&id_or_slug)?;

    if patch.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
        return Err(ApiError::Validation("title must not be empty".to_owned()));
    }

    let post = PostRepository::new(state.pool()).update(id, patch).await?;

    Ok(Json(post))
}

/// Hard-delete a post.
///
/// DELETE /api/posts/{id}
///
/// # Errors
///
/// 400 for a non-numeric id, 404 for an unknown post.
pub async fn remove(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> Result<StatusCode> {
    let id = numeric_id(&id_or_slug)?;

    PostRepository::new(state.pool()).delete(id).await?;

    tracing::info!(post_id = %id, "post deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Mutations address posts by id only; slugs are read-side keys.
fn numeric_id(segment: &str) -> Result<PostId> {
    match PostKey::parse(segment) {
        PostKey::Id(id) => Ok(id),
        PostKey::Slug(_) => Err(ApiError::Validation(
            "post id must be numeric".to_owned(),
        )),
    }
}
