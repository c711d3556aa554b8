//! Post CRUD service

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::post::{Post, PostDraft, PostPatch};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::PostRepository;

/// Service for post CRUD
///
/// Reads are public; mutations require an authenticated user, and
/// update/delete are scoped to the post's author.
pub struct PostService<P>
where
    P: PostRepository,
{
    post_repository: Arc<P>,
}

impl<P> PostService<P>
where
    P: PostRepository,
{
    /// Create a new post service
    pub fn new(post_repository: Arc<P>) -> Self {
        Self { post_repository }
    }

    /// Create a post authored by the given user
    pub async fn create(&self, draft: PostDraft, author: &User) -> DomainResult<Post> {
        let post = Post::new(author, draft);
        self.post_repository.create(post).await
    }

    /// List all posts, newest first
    pub async fn list(&self) -> DomainResult<Vec<Post>> {
        self.post_repository.list().await
    }

    /// Fetch a single post
    pub async fn get(&self, id: Uuid) -> DomainResult<Post> {
        self.post_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: format!("post {}", id),
            })
    }

    /// Update a post; only its author may edit it
    pub async fn update(&self, id: Uuid, patch: PostPatch, editor: &User) -> DomainResult<Post> {
        let mut post = self.get(id).await?;

        if !post.is_authored_by(editor) {
            return Err(DomainError::Unauthorized);
        }

        post.apply(patch);
        self.post_repository.update(post).await
    }

    /// Delete a post; only its author may delete it
    pub async fn delete(&self, id: Uuid, editor: &User) -> DomainResult<()> {
        let post = self.get(id).await?;

        if !post.is_authored_by(editor) {
            return Err(DomainError::Unauthorized);
        }

        self.post_repository.delete(id).await?;
        Ok(())
    }
}
