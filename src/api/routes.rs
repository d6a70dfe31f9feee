//! Route configuration.

use axum::Router;
use axum::routing::get;

use super::handlers::{pages, projects};
use super::state::AppState;
use super::static_assets;
use crate::db::Database;

/// Build the site router.
///
/// Static pages are plain handlers; only the routes that touch storage take
/// the database type parameter. Anything unmatched falls through to a 404.
pub fn create_router<D: Database>(state: AppState<D>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/resume", get(pages::resume))
        .route("/projects", get(projects::list_projects::<D>))
        .route("/contact", get(pages::contact))
        .route("/thankyou", get(pages::thankyou))
        .route(
            "/add",
            get(projects::add_form).post(projects::add_project::<D>),
        )
        .route("/static/{*path}", get(static_assets::serve))
        .fallback(pages::not_found)
        .with_state(state)
}
