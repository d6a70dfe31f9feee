//! SQLite ProjectRepository implementation.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use crate::db::{DbError, DbResult, NewProject, Project, ProjectRepository};

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// The single mapping point between the table's column names and the model's
/// field names. The columns keep their historical casing; nothing outside
/// this function knows about it.
fn map_row(row: &SqliteRow) -> Project {
    Project {
        id: row.get("id"),
        title: row.get("Title"),
        description: row.get("Description"),
        image_file_name: row.get("ImageFileName"),
        created_at: row.get("CreatedAt"),
    }
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    async fn insert(&self, project: &NewProject) -> DbResult<i64> {
        // CreatedAt is deliberately omitted: the column default stamps it.
        let result = sqlx::query(
            "INSERT INTO projects (Title, Description, ImageFileName) VALUES (?, ?, ?)",
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_file_name)
        .execute(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> DbResult<Vec<Project>> {
        // CURRENT_TIMESTAMP has one-second resolution, so same-second inserts
        // tie on CreatedAt; id DESC keeps those newest-first as well.
        let rows = sqlx::query(
            "SELECT id, Title, Description, ImageFileName, CreatedAt
             FROM projects
             ORDER BY CreatedAt DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(rows.iter().map(map_row).collect())
    }
}
