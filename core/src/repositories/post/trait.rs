//! Post repository trait defining the interface for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

/// Repository trait for Post entity persistence operations
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post
    async fn create(&self, post: Post) -> Result<Post, DomainError>;

    /// List all posts, newest first
    async fn list(&self) -> Result<Vec<Post>, DomainError>;

    /// Find a post by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;

    /// Persist changes to an existing post
    async fn update(&self, post: Post) -> Result<Post, DomainError>;

    /// Delete a post
    ///
    /// # Returns
    /// * `Ok(true)` - Post deleted
    /// * `Ok(false)` - No post with the given id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
