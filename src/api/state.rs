//! Application state for the site server.

use std::sync::Arc;

use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so handlers can run against any storage
/// backend; the database is injected via the constructor, not created here.
pub struct AppState<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - we only need the Arc to be cloneable, not D.
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState owning the given database.
    pub fn new(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }
}
