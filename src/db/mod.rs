//! Storage layer: the repository trait and its implementations.

mod memory;
mod postgres;

pub use memory::MemoryPostRepository;
pub use postgres::PgPostRepository;

use crate::error::Result;
use crate::models::Post;
use async_trait::async_trait;

/// A post as handed to the storage layer, before an identifier exists.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: i64,
    pub body: String,
}

/// Storage adapter for posts.
///
/// Implementations translate the two domain operations into queries against
/// the backing store. Absence of a row is reported as `AppError::NotFound`,
/// distinct from any transport or query failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch one post by primary key.
    async fn get_by_id(&self, id: i64) -> Result<Post>;

    /// Insert one post and return the assigned identifier.
    async fn create(&self, post: NewPost) -> Result<i64>;
}
