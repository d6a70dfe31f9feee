//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewProject, Project},
};

/// A storage backend holding the projects table.
pub trait Database: Send + Sync + 'static {
    type Projects<'a>: ProjectRepository + Send + Sync
    where
        Self: 'a;

    /// Ensure the schema exists. Idempotent: safe to call repeatedly with no
    /// error and no data loss, and creates the backing file if absent.
    fn init_schema(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Access the project repository.
    fn projects(&self) -> Self::Projects<'_>;
}

/// Repository for Project operations.
///
/// The entity is append-only, so the whole surface is insert and list.
pub trait ProjectRepository {
    /// Insert a new project and return its assigned identifier.
    ///
    /// The creation timestamp is stamped by the store, not the caller.
    /// Duplicate content is permitted.
    fn insert(&self, project: &NewProject) -> impl Future<Output = DbResult<i64>> + Send;

    /// Get all projects, most recently created first.
    ///
    /// An empty table yields an empty vec, not an error.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;
}
