//! Post Service Library
//!
//! A small CRUD service for posts backed by PostgreSQL.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers and route configuration
//! - `services`: Business logic layer
//! - `db`: Repository trait and storage implementations
//! - `models`: Data structures for posts
//! - `error`: Error types and HTTP mapping
//! - `config`: Configuration management
//! - `metrics`: Prometheus collectors and exposition

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
