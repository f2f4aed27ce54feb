//! Data models for post-service.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A post as stored and served.
///
/// The identifier is assigned by storage on creation and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub body: String,
}

/// Create request body. An `id` field, if present, is ignored; storage
/// assigns the identifier.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(range(min = 1, message = "author_id is required"))]
    pub author_id: i64,
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}
