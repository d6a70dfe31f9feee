//! Tests for the SQLite connection and schema initialization.

use crate::db::{Database, DbError, NewProject, ProjectRepository, SqliteDatabase};

fn sample() -> NewProject {
    NewProject {
        title: "Alpha".to_string(),
        description: "First project".to_string(),
        image_file_name: "alpha.jpg".to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn init_schema_creates_projects_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.init_schema().await.expect("Schema creation should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    assert!(
        tables.iter().any(|t| t == "projects"),
        "Missing projects table. Found tables: {:?}",
        tables
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn init_schema_is_idempotent_and_preserves_rows() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.init_schema().await.expect("First call should succeed");
    db.projects()
        .insert(&sample())
        .await
        .expect("Insert should succeed");

    // Repeated calls must not error and must not touch existing rows.
    db.init_schema().await.expect("Second call should succeed");
    db.init_schema().await.expect("Third call should succeed");

    let projects = db.projects().list().await.expect("List should succeed");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Alpha");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_the_backing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.db");
    assert!(!path.exists());

    let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
    db.init_schema().await.expect("Schema creation should succeed");

    assert!(path.exists(), "Backing file should have been created");
}

#[tokio::test(flavor = "multi_thread")]
async fn rows_survive_reopening_the_store() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.db");

    {
        let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
        db.init_schema().await.expect("Schema creation should succeed");
        db.projects()
            .insert(&sample())
            .await
            .expect("Insert should succeed");
    }

    let db = SqliteDatabase::open(&path).await.expect("Reopen should succeed");
    db.init_schema().await.expect("Schema re-init should succeed");

    let projects = db.projects().list().await.expect("List should succeed");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].image_file_name, "alpha.jpg");
}

#[tokio::test(flavor = "multi_thread")]
async fn open_surfaces_an_unusable_path_as_connection_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    // The parent directory does not exist, so SQLite cannot create the file.
    let path = dir.path().join("missing").join("projects.db");

    let result = SqliteDatabase::open(&path).await;
    assert!(matches!(result, Err(DbError::Connection { .. })));
}
