//! Post service - delegates to the storage layer and logs outcomes.

use crate::db::{NewPost, PostRepository};
use crate::error::Result;
use crate::models::Post;
use std::sync::Arc;

/// Domain service over an injected repository.
///
/// Both operations are direct pass-throughs; repository errors propagate
/// unchanged so `NotFound` stays distinguishable at the HTTP layer.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Get a post by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Post> {
        match self.repo.get_by_id(id).await {
            Ok(post) => {
                tracing::info!(operation = "PostService::get_by_id", id, "post fetched");
                Ok(post)
            }
            Err(err) => {
                tracing::error!(operation = "PostService::get_by_id", id, error = %err, "fetch failed");
                Err(err)
            }
        }
    }

    /// Create a post, returning the assigned identifier
    pub async fn create(&self, post: NewPost) -> Result<i64> {
        match self.repo.create(post).await {
            Ok(id) => {
                tracing::info!(operation = "PostService::create", id, "post created");
                Ok(id)
            }
            Err(err) => {
                tracing::error!(operation = "PostService::create", error = %err, "create failed");
                Err(err)
            }
        }
    }
}
