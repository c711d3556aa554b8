//! Post entity and its value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// A published blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for the post
    pub id: Uuid,

    /// Username of the author at creation time
    pub author: String,

    /// Identifier of the authoring user
    pub author_id: Uuid,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Timestamp when the post was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last edit
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a post
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

/// Partial update applied to an existing post; absent fields are untouched
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    /// Creates a new post authored by the given user
    pub fn new(author: &User, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author: author.username.clone(),
            author_id: author.id,
            title: draft.title,
            content: draft.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update and bumps `updated_at`
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the given user authored this post
    pub fn is_authored_by(&self, user: &User) -> bool {
        self.author_id == user.id
    }
}
