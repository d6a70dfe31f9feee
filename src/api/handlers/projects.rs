//! Handlers for the project listing and the submission form.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::instrument;

use crate::api::state::AppState;
use crate::api::templates;
use crate::db::{Database, NewProject, ProjectRepository};

/// Fields submitted by the add-project form.
///
/// Field names match the HTML form; `imageFileName` is the one wire name
/// that differs from the model's field name.
#[derive(Debug, Deserialize)]
pub struct AddProjectForm {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "imageFileName")]
    pub image_file_name: Option<String>,
}

impl AddProjectForm {
    /// Accept the submission only when all three fields are present and
    /// non-empty. No trimming, no further validation.
    fn into_new_project(self) -> Option<NewProject> {
        let title = self.title.filter(|s| !s.is_empty())?;
        let description = self.description.filter(|s| !s.is_empty())?;
        let image_file_name = self.image_file_name.filter(|s| !s.is_empty())?;
        Some(NewProject {
            title,
            description,
            image_file_name,
        })
    }
}

/// GET /projects - render all projects, newest first.
#[instrument(skip(state))]
pub async fn list_projects<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Response, (StatusCode, String)> {
    let projects = state
        .db()
        .projects()
        .list()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(templates::projects_page(&projects))
}

/// GET /add - render the empty submission form.
pub async fn add_form() -> Response {
    templates::page("add")
}

/// POST /add - insert and redirect to the listing when the submission is
/// complete, otherwise re-render the empty form with a 200.
///
/// There is no duplicate-submission protection: resubmitting the same form
/// inserts another record. That is the intended behavior.
#[instrument(skip(state, form))]
pub async fn add_project<D: Database>(
    State(state): State<AppState<D>>,
    Form(form): Form<AddProjectForm>,
) -> Result<Response, (StatusCode, String)> {
    let Some(project) = form.into_new_project() else {
        return Ok(templates::page("add"));
    };

    let id = state
        .db()
        .projects()
        .insert(&project)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(id, title = %project.title, "project added");
    Ok(Redirect::to("/projects").into_response())
}
