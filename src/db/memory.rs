//! In-memory repository, a fake standing in for PostgreSQL in tests.

use crate::db::{NewPost, PostRepository};
use crate::error::{AppError, Result};
use crate::models::Post;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Map-backed `PostRepository` with a monotonically increasing identifier.
///
/// Supports injecting a storage failure and counting invocations so tests
/// can assert that malformed input never reaches the storage layer.
pub struct MemoryPostRepository {
    posts: Mutex<HashMap<i64, Post>>,
    next_id: AtomicI64,
    fail_with: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            fail_with: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent operation fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Number of repository operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn injected_failure(&self) -> Option<AppError> {
        self.fail_with
            .lock()
            .unwrap()
            .clone()
            .map(AppError::Database)
    }
}

impl Default for MemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn get_by_id(&self, id: i64) -> Result<Post> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        self.posts
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn create(&self, post: NewPost) -> Result<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.posts.lock().unwrap().insert(
            id,
            Post {
                id,
                author_id: post.author_id,
                body: post.body,
            },
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let repo = MemoryPostRepository::new();
        let id = repo
            .create(NewPost {
                author_id: 1,
                body: "test".to_string(),
            })
            .await
            .unwrap();
        assert!(id > 0);

        let post = repo.get_by_id(id).await.unwrap();
        assert_eq!(
            post,
            Post {
                id,
                author_id: 1,
                body: "test".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let repo = MemoryPostRepository::new();
        let err = repo.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn injected_failure_is_a_database_error() {
        let repo = MemoryPostRepository::new();
        repo.fail_with("connection refused");
        let err = repo
            .create(NewPost {
                author_id: 1,
                body: "test".to_string(),
            })
            .await
            .unwrap_err();
        match err {
            AppError::Database(msg) => assert_eq!(msg, "connection refused"),
            other => panic!("expected Database error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn identifiers_increase_monotonically() {
        let repo = MemoryPostRepository::new();
        let first = repo
            .create(NewPost {
                author_id: 1,
                body: "a".to_string(),
            })
            .await
            .unwrap();
        let second = repo
            .create(NewPost {
                author_id: 2,
                body: "b".to_string(),
            })
            .await
            .unwrap();
        assert!(second > first);
    }
}
