//! Domain models for the portfolio database.
//!
//! These models are storage-agnostic and represent the single persisted
//! entity used throughout the application.

use serde::{Deserialize, Serialize};

/// A persisted project record.
///
/// `id` and `created_at` are assigned by the store at insertion time and
/// never change afterwards. The entity is append-only: no update or delete
/// operations exist anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Row identifier, assigned by the store, monotonically increasing.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Just a filename string, never a binary blob.
    pub image_file_name: String,
    /// Stamped by the store at insertion time, the sole sort key for listings.
    pub created_at: String,
}

/// Payload for inserting a new project.
///
/// Values are stored verbatim, including empty strings and characters that
/// HTML renderers must escape. Escaping is the renderer's concern, not the
/// storage layer's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_file_name: String,
}
