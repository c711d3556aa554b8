//! Mock implementation of PostRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::errors::DomainError;

use super::r#trait::PostRepository;

/// Mock post repository for testing
pub struct MockPostRepository {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
}

impl MockPostRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.posts.read().await;
        let mut all: Vec<Post> = posts.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }
}
