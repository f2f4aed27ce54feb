//! Business logic layer.

mod posts;

pub use posts::PostService;
