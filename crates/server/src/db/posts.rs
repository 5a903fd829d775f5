//! Blog post repository for database operations.

use sqlx::PgPool;

use vetaris_core::{PostId, slugify};

use super::RepositoryError;
use crate::models::BlogPost;
use crate::models::post::{NewPost, PostKey, PostPatch};

const POST_COLUMNS: &str = "id, title, slug, content, image, summary, is_published, created_at";

/// Repository for blog post database operations.
pub struct PostRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List posts, newest first.
    ///
    /// Unpublished posts are excluded unless `include_unpublished` is set
    /// (admin listing).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(
        &self,
        include_unpublished: bool,
    ) -> Result<Vec<BlogPost>, RepositoryError> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            r"
            SELECT {POST_COLUMNS}
            FROM posts
            WHERE is_published = TRUE OR $1
            ORDER BY created_at DESC, id DESC
            ",
        ))
        .bind(include_unpublished)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a post by numeric id or slug; the key's shape picks the query.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_key(&self, key: &PostKey) -> Result<Option<BlogPost>, RepositoryError> {
        let post = match key {
            PostKey::Id(id) => {
                sqlx::query_as::<_, BlogPost>(&format!(
                    "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
                ))
                .bind(*id)
                .fetch_optional(self.pool)
                .await?
            }
            PostKey::Slug(slug) => {
                sqlx::query_as::<_, BlogPost>(&format!(
                    "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
                ))
                .bind(slug)
                .fetch_optional(self.pool)
                .await?
            }
        };

        Ok(post)
    }

    /// Create a post. The slug is derived from the title here and never
    /// regenerated afterwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if another post already owns the
    /// derived slug. Returns `RepositoryError::Database` for other errors.
    pub async fn create(&self, new: NewPost) -> Result<BlogPost, RepositoryError> {
        let slug = slugify(&new.title);

        let post = sqlx::query_as::<_, BlogPost>(&format!(
            r"
            INSERT INTO posts (title, slug, content, image, summary, is_published)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {POST_COLUMNS}
            ",
        ))
        .bind(new.title)
        .bind(slug)
        .bind(new.content)
        .bind(new.image.unwrap_or_default())
        .bind(new.summary.unwrap_or_default())
        .bind(new.is_published.unwrap_or(true))
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(
                    "a post with this title already exists".to_owned(),
                );
            }
            RepositoryError::Database(e)
        })?;

        Ok(post)
    }

    /// Apply a partial update. Same `COALESCE` contract as the product
    /// repository; the slug column is not touchable from here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the post doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: PostId, patch: PostPatch) -> Result<BlogPost, RepositoryError> {
        let post = sqlx::query_as::<_, BlogPost>(&format!(
            r"
            UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                image = COALESCE($4, image),
                summary = COALESCE($5, summary),
                is_published = COALESCE($6, is_published)
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            ",
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.image)
        .bind(patch.summary)
        .bind(patch.is_published)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound("post"))?;

        Ok(post)
    }

    /// Hard-delete a post.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the post doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: PostId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("post"));
        }

        Ok(())
    }
}
