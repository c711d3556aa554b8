//! MySQL implementation of the PostRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ink_core::domain::entities::post::Post;
use ink_core::errors::DomainError;
use ink_core::repositories::PostRepository;

/// MySQL implementation of PostRepository
pub struct MySqlPostRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPostRepository {
    /// Create a new MySQL post repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Post entity
    fn row_to_post(row: &sqlx::mysql::MySqlRow) -> Result<Post, DomainError> {
        let id: String = row.try_get("id").map_err(db_err("id"))?;
        let author_id: String = row.try_get("author_id").map_err(db_err("author_id"))?;

        Ok(Post {
            id: parse_uuid(&id)?,
            author: row.try_get("author").map_err(db_err("author"))?,
            author_id: parse_uuid(&author_id)?,
            title: row.try_get("title").map_err(db_err("title"))?,
            content: row.try_get("content").map_err(db_err("content"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_err("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(db_err("updated_at"))?,
        })
    }
}

const POST_COLUMNS: &str = "id, author, author_id, title, content, created_at, updated_at";

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            INSERT INTO posts (
                id, author, author_id, title, content,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(post.id.to_string())
            .bind(&post.author)
            .bind(post.author_id.to_string())
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.created_at)
            .bind(post.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create post: {}", e),
            })?;

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let query = format!("SELECT {} FROM posts ORDER BY created_at DESC", POST_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_post).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let query = format!("SELECT {} FROM posts WHERE id = ? LIMIT 1", POST_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_post(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            UPDATE posts
            SET title = ?, content = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.updated_at)
            .bind(post.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update post: {}", e),
            })?;

        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete post: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Database {
        message: format!("Invalid UUID: {}", e),
    })
}

fn db_err(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    }
}
