//! Post DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ink_core::domain::entities::post::{Post, PostDraft, PostPatch};

/// Body of `POST /posts`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,
}

impl From<CreatePostRequest> for PostDraft {
    fn from(request: CreatePostRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

/// Body of `PATCH /posts/{post_id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(request: UpdatePostRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

/// Public view of a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
