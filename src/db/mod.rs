//! Storage access layer for project records.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (SQLite, in-memory, etc.)
//! to be swapped without changing the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: The persisted entity (Project) and its insert payload
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLite-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
