//! Blog post records and write shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use vetaris_core::PostId;

/// A blog post.
///
/// The slug is derived from the title at creation and never changes
/// afterwards, so published URLs stay stable across title edits.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub image: String,
    pub summary: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating a post.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub is_published: Option<bool>,
}

/// Partial update for a post.
///
/// The allow-list mirrors the mutable columns; slug is deliberately absent.
/// Unknown keys fail deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub is_published: Option<bool>,
}

impl PostPatch {
    /// True when no field is set; the update is then a no-op read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.image.is_none()
            && self.summary.is_none()
            && self.is_published.is_none()
    }
}

/// Lookup key for a single post: numeric id or slug, selected by the shape
/// of the path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostKey {
    Id(PostId),
    Slug(String),
}

impl PostKey {
    /// Parse a path segment: integer segments are ids, anything else is a
    /// slug.
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        segment.parse::<i32>().map_or_else(
            |_| Self::Slug(segment.to_owned()),
            |id| Self::Id(PostId::new(id)),
        )
    }
}
