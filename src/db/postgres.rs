//! PostgreSQL-backed repository.

use crate::db::{NewPost, PostRepository};
use crate::error::{AppError, Result};
use crate::models::Post;
use async_trait::async_trait;
use sqlx::PgPool;

/// Repository over a sqlx PostgreSQL pool.
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn get_by_id(&self, id: i64) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, body
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(operation = "PgPostRepository::get_by_id", id, error = %e, "query failed");
            AppError::Database(e.to_string())
        })?;

        post.ok_or_else(|| {
            tracing::error!(operation = "PgPostRepository::get_by_id", id, "post not found");
            AppError::NotFound
        })
    }

    async fn create(&self, post: NewPost) -> Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO posts (author_id, body)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(post.author_id)
        .bind(&post.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(operation = "PgPostRepository::create", error = %e, "insert failed");
            AppError::Database(e.to_string())
        })?;

        Ok(id)
    }
}
